use yew::prelude::*;

use crate::components::cards::{BenefitCard, CtaBanner, Step};
use crate::components::hero::Hero;
use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::config;
use crate::Route;

pub const PARTNERS: [&str; 5] = [
    "Famacnit",
    "Xander 360",
    "Igreja Católica",
    "Rede Clima",
    "Transformando Vidas",
];

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <main class="partners-page">
            <Hero
                title="Juntos, Nosso Impacto é Maior"
                description="Oferecemos uma parceria estratégica com benefícios mútuos para empresas que acreditam na transformação social."
            />

            // Benefits
            <Reveal class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Por Que Ser um Parceiro da FANIBRAS?"}</h2>
                        <p>{"Uma parceria estratégica com benefícios mútuos."}</p>
                    </div>
                    <div class="grid-3 narrow">
                        <BenefitCard icon={Icon::Certificate} title="Impacto Social Verificado">
                            {"Invista em projetos auditados, com transparência total."}
                        </BenefitCard>
                        <BenefitCard icon={Icon::Bullhorn} title="Visibilidade e Reputação">
                            {"Associe sua marca a uma causa nobre e fortaleça sua reputação."}
                        </BenefitCard>
                        <BenefitCard icon={Icon::Building} title="Fortalecimento Comunitário">
                            {"Contribua diretamente para o desenvolvimento sustentável das comunidades."}
                        </BenefitCard>
                    </div>
                </div>
            </Reveal>

            // Current partners
            <Reveal class="section section-alt" threshold={0.3}>
                <div class="container">
                    <div class="section-header">
                        <h2>{"Um Coletivo Unido Pela Mesma Causa"}</h2>
                        <p>{"Agradecemos a todos os parceiros que acreditam e fortalecem a nossa luta."}</p>
                    </div>
                    <div class="partner-names">
                        {
                            for PARTNERS.iter().map(|name| html! {
                                <span class="reveal-item">{ *name }</span>
                            })
                        }
                    </div>
                </div>
            </Reveal>

            // How to join
            <Reveal class="section">
                <div class="container grid-2">
                    <div class="media-frame reveal-item">
                        <img src={config::PLACEHOLDER_IMAGE} alt="Reunião de parceria estratégica" loading="lazy" />
                    </div>
                    <div class="reveal-item">
                        <h2 class="steps-title">{"Vamos Conversar?"}</h2>
                        <div class="steps">
                            <Step number="01" title="Primeiro Contato">
                                {"Envie uma mensagem pelo nosso formulário."}
                            </Step>
                            <Step number="02" title="Alinhamento Estratégico">
                                {"Conversamos para alinhar propósitos e expectativas."}
                            </Step>
                            <Step number="03" title="Formalização da Parceria">
                                {"Formalizamos a parceria e começamos a transformação."}
                            </Step>
                        </div>
                    </div>
                </div>
            </Reveal>

            <CtaBanner
                title="Pronto para Fazer a Diferença?"
                text="Sua parceria pode ser a chave para um futuro melhor."
                button_text="Entre em Contato"
                to={Route::Contact}
            />

            <style>
                {r#"
                .partner-names {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem 4rem;
                    color: #6b7280;
                }
                .partner-names span {
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .steps-title {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                "#}
            </style>
        </main>
    }
}
