use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::hero::Hero;
use crate::components::icons::{Glyph, Icon};
use crate::components::reveal::Reveal;
use crate::donation::{DonationForm, Frequency, PaymentMethod, PRESET_AMOUNTS};

#[function_component(Donate)]
pub fn donate() -> Html {
    let form = use_state(DonationForm::default);

    let update = {
        let form = form.clone();
        move |change: Box<dyn Fn(&mut DonationForm)>| {
            let mut next = (*form).clone();
            change(&mut next);
            debug!("Donation form: {:?}", next);
            form.set(next);
        }
    };

    let on_custom = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            update(Box::new(move |f: &mut DonationForm| f.set_custom(&raw)));
        })
    };

    let preset_button = |value: u32| {
        let update = update.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            update(Box::new(move |f: &mut DonationForm| f.select_preset(value)));
        });
        html! {
            <button
                type="button"
                class={classes!("amount-button", form.is_selected(value).then(|| "selected"))}
                {onclick}
            >
                { format!("R$ {}", value) }
            </button>
        }
    };

    let frequency_button = |frequency: Frequency| {
        let update = update.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            update(Box::new(move |f: &mut DonationForm| f.frequency = frequency));
        });
        html! {
            <button
                type="button"
                class={classes!("frequency-option", (form.frequency == frequency).then(|| "active"))}
                {onclick}
            >
                { frequency.label() }
            </button>
        }
    };

    let method_tab = |method: PaymentMethod, icon: Icon| {
        let update = update.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            update(Box::new(move |f: &mut DonationForm| f.payment_method = method));
        });
        html! {
            <button
                type="button"
                class={classes!("method-tab", (form.payment_method == method).then(|| "active"))}
                {onclick}
            >
                <Glyph icon={icon} />
                { format!(" {}", method.label()) }
            </button>
        }
    };

    let on_finish = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            info!(
                "Donation finished without checkout: {:?} via {}",
                form.effective_amount(),
                form.payment_method.label()
            );
        })
    };

    html! {
        <main class="donate-page">
            <Hero
                title="Doe amor, colha transformação"
                description="Cada contribuição fortalece associações verificadas e transforma vidas."
            />

            <Reveal class="section section-alt" threshold={0.1}>
                <div class="container donate-grid">
                    <div class="donation-panel">
                        <div>
                            <h3>{"1. Escolha um valor"}</h3>
                            <div class="amounts">
                                { for PRESET_AMOUNTS.iter().map(|value| preset_button(*value)) }
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    placeholder="Outro valor"
                                    class={classes!("amount-button", "custom-amount", form.custom_selected().then(|| "selected"))}
                                    value={form.custom().to_string()}
                                    oninput={on_custom}
                                />
                            </div>
                        </div>

                        <div>
                            <h3>{"2. Escolha a frequência"}</h3>
                            <div class={classes!("frequency", (form.frequency == Frequency::Monthly).then(|| "monthly"))}>
                                <div class="frequency-slider"></div>
                                { frequency_button(Frequency::Unique) }
                                { frequency_button(Frequency::Monthly) }
                            </div>
                        </div>

                        <div>
                            <h3>{"3. Método de Pagamento"}</h3>
                            <div class="method-tabs">
                                { method_tab(PaymentMethod::Pix, Icon::Barcode) }
                                { method_tab(PaymentMethod::Card, Icon::CreditCard) }
                            </div>
                            <div class="method-panel" key={form.payment_method.label()}>
                                {
                                    match form.payment_method {
                                        PaymentMethod::Pix => html! {
                                            <div class="pix-panel">
                                                <p>{"Escaneie o código QR com o app do seu banco."}</p>
                                                <div class="qr-placeholder">{"[QR Code Placeholder]"}</div>
                                            </div>
                                        },
                                        PaymentMethod::Card => html! {
                                            <div class="card-panel">
                                                <div>
                                                    <label for="card-name">{"Nome no Cartão"}</label>
                                                    <input type="text" id="card-name" />
                                                </div>
                                                <div>
                                                    <label for="card-number">{"Número do Cartão"}</label>
                                                    <input type="text" id="card-number" inputmode="numeric" />
                                                </div>
                                            </div>
                                        },
                                    }
                                }
                            </div>
                        </div>

                        <div>
                            if let Some(summary) = form.summary() {
                                <p class="donation-summary">{ summary }</p>
                            }
                            <button type="button" class="btn btn-accent finish" onclick={on_finish}>
                                {"Finalizar Doação"}
                            </button>
                            <p class="secure-note">
                                <Glyph icon={Icon::Lock} />
                                {" Sua doação é segura."}
                            </p>
                        </div>
                    </div>

                    <div class="donate-side">
                        <div>
                            <h2>{"Seu Impacto Direto"}</h2>
                            <div class="impact-list">
                                <div class="impact-item">
                                    <Glyph icon={Icon::Heart} class="impact-icon" />
                                    <p><strong>{"Com R$ 50,"}</strong>{" você ajuda uma família durante uma semana."}</p>
                                </div>
                                <div class="impact-item">
                                    <Glyph icon={Icon::Calendar} class="impact-icon" />
                                    <p><strong>{"Com R$ 100 por mês,"}</strong>{" você sustenta um jovem em um curso profissionalizante."}</p>
                                </div>
                            </div>
                        </div>
                        <div>
                            <h2>{"Perguntas Frequentes"}</h2>
                            <div class="faq-list">
                                <FaqItem question="Minha doação é dedutível?">
                                    <p>{"Consulte o seu contador: doações a associações qualificadas podem ser deduzidas do imposto de renda."}</p>
                                </FaqItem>
                                <FaqItem question="Como meu dinheiro é utilizado?">
                                    <p>{"A maior parte da sua doação vai diretamente para os nossos projetos. Veja a nossa página de transparência."}</p>
                                </FaqItem>
                            </div>
                        </div>
                    </div>
                </div>
            </Reveal>

            <style>
                {r#"
                .donate-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    align-items: flex-start;
                }
                .donation-panel {
                    background: #ffffff;
                    padding: 3rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .donation-panel h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .amounts {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .amount-button {
                    padding: 1rem;
                    border: 2px solid #d1d5db;
                    border-radius: 0.5rem;
                    background: #ffffff;
                    color: #1A535C;
                    font: inherit;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-align: center;
                    cursor: pointer;
                    transition: border-color 0.2s, background 0.2s, color 0.2s;
                    box-sizing: border-box;
                    width: 100%;
                }
                .amount-button:hover {
                    border-color: #1A535C;
                }
                .amount-button.selected {
                    background: #1A535C;
                    color: #ffffff;
                    border-color: #1A535C;
                }
                .custom-amount.selected::placeholder {
                    color: rgba(255, 255, 255, 0.7);
                }
                .frequency {
                    position: relative;
                    display: flex;
                    background: #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 0.25rem;
                }
                .frequency-slider {
                    position: absolute;
                    top: 0.25rem;
                    bottom: 0.25rem;
                    left: 0.25rem;
                    width: calc(50% - 0.25rem);
                    background: #ffffff;
                    border-radius: 0.375rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .frequency.monthly .frequency-slider {
                    transform: translateX(100%);
                }
                .frequency-option {
                    position: relative;
                    z-index: 1;
                    flex: 1;
                    padding: 0.75rem;
                    border: none;
                    background: transparent;
                    font: inherit;
                    font-weight: 700;
                    color: #6b7280;
                    cursor: pointer;
                }
                .frequency-option.active {
                    color: #1A535C;
                }
                .method-tabs {
                    display: flex;
                    border-bottom: 1px solid #e5e7eb;
                }
                .method-tab {
                    flex: 1;
                    padding: 0.75rem;
                    border: none;
                    border-bottom: 4px solid transparent;
                    background: transparent;
                    font: inherit;
                    font-weight: 700;
                    color: #6b7280;
                    cursor: pointer;
                }
                .method-tab:hover,
                .method-tab.active {
                    color: #1A535C;
                }
                .method-tab.active {
                    border-bottom-color: #1A535C;
                }
                .method-panel {
                    padding-top: 1.5rem;
                    animation: panel-in 0.3s ease-out both;
                }
                @keyframes panel-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                .pix-panel {
                    text-align: center;
                }
                .pix-panel p {
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .qr-placeholder {
                    width: 12rem;
                    height: 12rem;
                    margin: 0 auto;
                    background: #e5e7eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .card-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .card-panel label {
                    display: block;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .card-panel input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .donation-summary {
                    text-align: center;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1A535C;
                    margin: 0 0 1rem;
                }
                .finish {
                    width: 100%;
                    font-size: 1.25rem;
                }
                .secure-note {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin-top: 1rem;
                }
                .donate-side {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .donate-side h2 {
                    font-size: 1.875rem;
                    margin-bottom: 1.5rem;
                }
                .impact-list,
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .impact-item {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: #ffffff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .impact-item p {
                    font-size: 1.125rem;
                    margin: 0;
                }
                .impact-icon {
                    font-size: 1.875rem;
                    color: #4ECDC4;
                }
                @media (max-width: 1024px) {
                    .donate-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .donation-panel {
                        padding: 2rem;
                    }
                    .amounts {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </main>
    }
}
