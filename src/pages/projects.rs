use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::AreaCard;
use crate::components::carousel::{Carousel, Slide};
use crate::components::hero::Hero;
use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::config;
use crate::Route;

struct Pillar {
    title: &'static str,
    text: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Seleção e Apoio",
        text: "Identificamos associações com grande potencial e acompanhamos cada uma desde o primeiro contato.",
    },
    Pillar {
        title: "Fortalecimento e Estrutura",
        text: "Oferecemos ferramentas de gestão e apoio jurídico para que os projetos se profissionalizem.",
    },
    Pillar {
        title: "Conexão e Escala",
        text: "Conectamos as associações a patrocinadores para ampliar o alcance do seu impacto.",
    },
];

fn featured_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            config::PLACEHOLDER_IMAGE,
            "Projeto de sucesso apoiado pela FAMN",
            "Oficinas comunitárias",
        ),
        Slide::new(
            config::PLACEHOLDER_IMAGE,
            "Voluntários da associação em ação",
            "Voluntariado em rede",
        ),
        Slide::new(
            config::PLACEHOLDER_IMAGE,
            "Beneficiários do projeto em destaque",
            "Resultados em seis meses",
        ),
    ]
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <main class="projects-page">
            <Hero
                title="Nosso Trabalho em Ação"
                description="Acreditamos que a transparência é o fundamento de toda confiança. Conheça como cada projeto ganha forma dentro do coletivo."
            />

            // Model
            <Reveal class="section" threshold={0.3}>
                <div class="container">
                    <div class="section-header">
                        <h2>{"Como Potencializamos o Impacto"}</h2>
                        <p>{"Nosso modelo se apoia em três pilares fundamentais."}</p>
                    </div>
                    <div class="grid-3 narrow">
                        {
                            for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                                <div class="pillar reveal-item">
                                    <div class="pillar-number">{ format!("{}.", i + 1) }</div>
                                    <h3>{ pillar.title }</h3>
                                    <p>{ pillar.text }</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </Reveal>

            // Areas
            <Reveal class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Nossas Frentes de Atuação"}</h2>
                        <p>{"Através de nossas associações filiadas, cobrimos áreas cruciais para o desenvolvimento social sustentável."}</p>
                    </div>
                    <div class="grid-3">
                        <AreaCard icon={Icon::Seedling} title="Desenvolvimento Humano" href="/projetos/desenvolvimento">
                            {"Das crianças aos jovens, do esporte à arte: formação ao longo de toda a vida."}
                        </AreaCard>
                        <AreaCard icon={Icon::Users} title="Apoio a Grupos Vulneráveis" href="/projetos/apoio">
                            {"Acolhemos egressos do sistema prisional e outras pessoas em situação de vulnerabilidade."}
                        </AreaCard>
                        <AreaCard icon={Icon::ChartBar} title="Ciência e Inovação Social" href="/projetos/ciencia">
                            {"Fomentamos pesquisa e patentes voltadas ao progresso social."}
                        </AreaCard>
                    </div>
                </div>
            </Reveal>

            // Featured case
            <Reveal class="section" threshold={0.3}>
                <div class="container grid-2">
                    <div class="reveal-item">
                        <Carousel slides={featured_slides()} />
                    </div>
                    <div class="split-text reveal-item">
                        <p class="eyebrow">{"PROJETO EM DESTAQUE"}</p>
                        <h2>{"Uma Associação, o Dobro de Impacto"}</h2>
                        <p>{"Com o nosso apoio, esta associação duplicou o seu impacto em seis meses."}</p>
                        <a href="/projetos/destaque" class="btn btn-primary">{"Leia o Case de Sucesso"}</a>
                    </div>
                </div>
            </Reveal>

            // Final CTA
            <section class="section section-alt">
                <div class="container">
                    <Reveal class="movement-panel" threshold={0.5}>
                        <div>
                            <h2>{"Faça Parte Deste Movimento"}</h2>
                            <p>{"Seja uma empresa parceira ou uma associação filiada. Juntos, nosso impacto é maior."}</p>
                        </div>
                        <div class="movement-actions">
                            <Link<Route> to={Route::Donate} classes="btn btn-accent">
                                {"Seja um Parceiro"}
                            </Link<Route>>
                            <Link<Route> to={Route::Contact} classes="btn movement-ghost">
                                {"Filie-se a Nós"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .pillar {
                    text-align: center;
                }
                .pillar-number {
                    font-size: 3rem;
                    color: #4ECDC4;
                    margin-bottom: 1rem;
                }
                .pillar h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .movement-panel {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    align-items: center;
                    background: #1A535C;
                    color: #ffffff;
                    padding: 3rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .movement-panel h2 {
                    color: #ffffff;
                    font-size: 2.25rem;
                }
                .movement-panel p {
                    font-size: 1.125rem;
                    margin-top: 1rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .movement-actions {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 1rem;
                }
                .movement-actions .btn-accent:hover {
                    background: #ffffff;
                }
                .movement-ghost {
                    color: #ffffff;
                    background: rgba(26, 83, 92, 0.5);
                }
                .movement-ghost:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                @media (max-width: 768px) {
                    .movement-panel {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .movement-actions {
                        flex-direction: column;
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_case_has_several_slides() {
        let slides = featured_slides();
        assert!(slides.len() > 1);
        assert!(slides.iter().all(|s| !s.alt.is_empty()));
    }
}
