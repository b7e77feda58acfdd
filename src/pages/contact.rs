use log::debug;
use yew::prelude::*;

use crate::components::cards::ContactInfoCard;
use crate::components::hero::Hero;
use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    // Messages are not sent anywhere; keep the browser from navigating away.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Contact form submitted without a destination");
    });

    html! {
        <main class="contact-page">
            <Hero
                title="Vamos Conversar"
                description="Fale com a nossa equipe. Respondemos empresas, associações e voluntários."
            />

            <Reveal class="section">
                <div class="container grid-2 contact-grid">
                    <div class="reveal-item">
                        <h2 class="contact-title">{"Nossos Canais"}</h2>
                        <div class="contact-cards">
                            <ContactInfoCard icon={Icon::MapMarker} title="Nosso Escritório">
                                <p>{ config::OFFICE_ADDRESS[0] }</p>
                                <p>{ config::OFFICE_ADDRESS[1] }</p>
                            </ContactInfoCard>
                            <ContactInfoCard icon={Icon::Envelope} title="E-mail">
                                <p>{ config::OFFICE_EMAIL }</p>
                            </ContactInfoCard>
                            <ContactInfoCard icon={Icon::Phone} title="Telefone">
                                <p>{ config::OFFICE_PHONE }</p>
                            </ContactInfoCard>
                        </div>
                    </div>
                    <div class="message-panel reveal-item">
                        <h2>{"Envie uma Mensagem"}</h2>
                        <form class="message-form" {onsubmit}>
                            <div>
                                <label for="name">{"Seu Nome"}</label>
                                <input type="text" id="name" name="name" />
                            </div>
                            <div>
                                <label for="email">{"Seu E-mail"}</label>
                                <input type="email" id="email" name="email" />
                            </div>
                            <div>
                                <label for="subject">{"Assunto"}</label>
                                <input type="text" id="subject" name="subject" />
                            </div>
                            <div>
                                <label for="message">{"Mensagem"}</label>
                                <textarea id="message" name="message" rows="5"></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary">{"Enviar Mensagem"}</button>
                        </form>
                    </div>
                </div>
            </Reveal>

            <section class="map-placeholder">
                <p>{"[Mapa de Localização]"}</p>
            </section>

            <style>
                {r#"
                .contact-grid {
                    align-items: flex-start;
                }
                .contact-title {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .message-panel {
                    background: #F7F9FA;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .message-panel h2 {
                    font-size: 1.875rem;
                    margin-bottom: 1.5rem;
                }
                .message-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .message-form label {
                    display: block;
                    font-weight: 700;
                    color: #1A535C;
                    margin-bottom: 0.5rem;
                }
                .message-form input,
                .message-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .message-form input:focus,
                .message-form textarea:focus {
                    outline: none;
                    border-color: #4ECDC4;
                    box-shadow: 0 0 0 2px rgba(78, 205, 196, 0.4);
                }
                .message-form .btn {
                    width: 100%;
                }
                .map-placeholder {
                    height: 24rem;
                    background: #e5e7eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                }
                .map-placeholder p {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                "#}
            </style>
        </main>
    }
}
