use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{TeamMemberCard, ValueCard};
use crate::components::counter::Counter;
use crate::components::icons::{Glyph, Icon};
use crate::components::reveal::Reveal;
use crate::config;
use crate::Route;

struct Goal {
    title: &'static str,
    text: &'static str,
}

const GOALS: [Goal; 4] = [
    Goal {
        title: "Associações Conectadas",
        text: "Fortalecemos coletivos e damos voz a projetos sociais, inclusive os que ainda não têm CNPJ.",
    },
    Goal {
        title: "Doações Arrecadadas",
        text: "Ampliamos o alcance junto a pessoas físicas e empresas.",
    },
    Goal {
        title: "Transparência Garantida",
        text: "Reportamos todas as ações e recursos.",
    },
    Goal {
        title: "Parcerias Corporativas",
        text: "Atraímos empresas que acreditam na transformação social.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="about-page">
            <section class="about-hero">
                <div class="about-hero-shade"></div>
                <div class="about-hero-content">
                    <h1>{"Sobre Nós"}</h1>
                    <p>{"Somos um coletivo de associações que acredita na força da solidariedade e da cooperação. Conectamos pessoas, projetos e empresas para transformar doações em impacto real e construir um futuro mais humano, transparente e sustentável."}</p>
                </div>
            </section>

            // History
            <Reveal class="section" threshold={0.0}>
                <div class="container grid-2">
                    <div class="split-text reveal-item">
                        <h2>{"Nossa História: Um Coletivo para Muitos"}</h2>
                        <p class="justified">{"Nossa trajetória nasceu da necessidade de criar um espaço onde associações pudessem se unir em prol de um bem maior. Percebemos que, isoladas, muitas iniciativas sociais tinham alcance limitado, mas juntas poderiam formar um hub de solidariedade e cooperação, capaz de multiplicar resultados e transformar realidades."}</p>
                        <p class="justified">{"Desde o início, nossa caminhada foi guiada por três pilares: humanismo, transparência e cooperação. Com eles, aprendemos que cada doação, cada parceria e cada gesto de apoio pode se tornar uma semente de transformação."}</p>
                    </div>
                    <div class="about-logo reveal-item">
                        <img src="/img/logo.jpg" alt="Logo FAMN - História da organização" width="500" height="500" />
                    </div>
                </div>
            </Reveal>

            // Qualitative goals and figures
            <section class="goals">
                <div class="container">
                    <Reveal class="goals-header" threshold={0.5}>
                        <h2>{"Metas Qualitativas"}</h2>
                    </Reveal>
                    <Reveal class="goals-grid" threshold={0.5}>
                        {
                            for GOALS.iter().map(|goal| html! {
                                <div class="goal reveal-item">
                                    <h3>{ goal.title }</h3>
                                    <p>{ goal.text }</p>
                                </div>
                            })
                        }
                    </Reveal>
                    <div class="goals-figures">
                        <Counter to={20} prefix="+" label="Associações no coletivo" />
                        <Counter to={85} suffix="%" label="Dos recursos em programas" />
                        <Counter to={100} suffix="%" label="Das ações reportadas" />
                    </div>
                </div>
            </section>

            // Mission, vision and values
            <Reveal class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Missão, Visão e Valores"}</h2>
                    </div>
                    <div class="grid-3 narrow">
                        <ValueCard icon={Icon::Bullseye} title="Missão" color="#ef4444">
                            {"Guiar as associações no desenvolvimento de um hub de serviços colaborativo para gerar valor e impacto positivo para a sociedade."}
                        </ValueCard>
                        <ValueCard icon={Icon::Eye} title="Visão" color="#3b82f6">
                            {"Nossa visão é sermos reconhecidos como uma associação de interesse público."}
                        </ValueCard>
                        <ValueCard icon={Icon::Handshake} title="Valores" color="#22c55e">
                            {"Solidariedade, humanismo e cooperação."}
                        </ValueCard>
                    </div>
                </div>
            </Reveal>

            // Team
            <Reveal class="section" id="equipe">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Nossa Equipe"}</h2>
                        <p>{"Conheça as pessoas apaixonadas e comprometidas que fazem a FANIBRAS acontecer todos os dias."}</p>
                    </div>
                    <div class="team-grid">
                        <TeamMemberCard
                            name="Diana Santos"
                            role="Presidente"
                            img_src="/img/equipe/Diana Santos.jpg"
                            description="Líder comprometida com a transformação social, Diana guia nossa organização com paixão e dedicação, sempre buscando fortalecer o coletivo e ampliar nosso impacto na comunidade."
                            social_links={vec![("Email".to_string(), "mailto:diana@fanibras.org.br".to_string())]}
                        />
                        <TeamMemberCard
                            name="Alexander (Xander 360)"
                            role="Chanceler"
                            img_src={config::PLACEHOLDER_IMAGE}
                            description="Chanceler do coletivo, responsável pelas relações institucionais e pela aproximação com parceiros estratégicos."
                            social_links={vec![("Email".to_string(), "mailto:alexander@fanibras.org.br".to_string())]}
                        />
                    </div>
                </div>
            </Reveal>

            // Location
            <Reveal class="section section-alt">
                <div class="container grid-2">
                    <div class="reveal-item">
                        <h2 class="location-title">{"Onde Nos Encontrar"}</h2>
                        <div class="location-lines">
                            <div class="location-line">
                                <Glyph icon={Icon::MapMarker} />
                                <div>
                                    <h3>{"Sede Principal"}</h3>
                                    <p>
                                        { config::HQ_ADDRESS[0] }<br />
                                        { config::HQ_ADDRESS[1] }<br />
                                        { config::HQ_ADDRESS[2] }
                                    </p>
                                </div>
                            </div>
                            <div class="location-line">
                                <Glyph icon={Icon::Phone} />
                                <div>
                                    <h3>{"Telefone"}</h3>
                                    <p>{ config::HQ_PHONE }</p>
                                </div>
                            </div>
                            <div class="location-line">
                                <Glyph icon={Icon::Envelope} />
                                <div>
                                    <h3>{"Email"}</h3>
                                    <p>{ config::HQ_EMAIL }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="map-frame reveal-item">
                        <iframe
                            src={config::MAP_EMBED_URL}
                            width="100%"
                            height="100%"
                            style="border: 0;"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Localização da FANIBRAS - Barreto, Niterói, RJ"
                        />
                        <div class="map-shade"></div>
                        <div class="map-caption">
                            <h3>{"Visite Nossa Sede"}</h3>
                            <p>{"Travessa Capitão Mário Tinoco, s/n - Barreto, Niterói"}</p>
                        </div>
                    </div>
                </div>
            </Reveal>

            // Final CTA
            <section class="section">
                <div class="container">
                    <Reveal class="join-panel" threshold={0.5}>
                        <h2>{"Junte-se à Nossa Causa!"}</h2>
                        <p>{"Sua participação, seja como voluntário, doador ou parceiro, é fundamental para continuarmos nossa missão de transformar vidas."}</p>
                        <div class="join-actions">
                            <Link<Route> to={Route::Contact} classes="join-button solid">
                                {"Entre em Contato "}
                                <Glyph icon={Icon::ArrowRight} />
                            </Link<Route>>
                            <a href="/voluntario" class="join-button outline">{"Seja Voluntário"}</a>
                            <Link<Route> to={Route::Donate} classes="join-button outline">
                                {"Faça uma Doação"}
                            </Link<Route>>
                        </div>
                        <p class="join-footnote">{"Juntos, somos mais fortes. Juntos, fazemos a diferença."}</p>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .about-hero {
                    position: relative;
                    height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #1A535C, #4ECDC4);
                }
                .about-hero-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                }
                .about-hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    color: #ffffff;
                    padding: 0 2rem;
                    max-width: 64rem;
                    animation: rise 0.8s ease-out both;
                }
                .about-hero-content h1 {
                    color: #ffffff;
                    font-size: 4.5rem;
                    margin-bottom: 1.5rem;
                }
                .about-hero-content p {
                    font-size: 1.5rem;
                    opacity: 0.9;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .justified {
                    text-align: justify;
                }
                .about-logo {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .about-logo img {
                    width: 28rem;
                    height: 28rem;
                    object-fit: contain;
                }
                .goals {
                    background: #1A535C;
                    padding: 5rem 0;
                }
                .goals-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .goals-header h2 {
                    color: #ffffff;
                    font-size: 2.25rem;
                }
                .goals-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .goal {
                    text-align: center;
                }
                .goal h3 {
                    color: #4ECDC4;
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                }
                .goal p {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.125rem;
                }
                .goals-figures {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 4rem;
                }
                .goals-figures .counter-value {
                    font-size: 3rem;
                }
                .goals-figures .counter-label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .location-title {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .location-lines {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .location-line {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .location-line .icon {
                    color: #4ECDC4;
                    font-size: 1.25rem;
                    margin-top: 0.25rem;
                }
                .location-line h3 {
                    font-size: 1rem;
                    margin-bottom: 0.5rem;
                }
                .location-line p {
                    margin: 0;
                    color: rgba(51, 51, 51, 0.8);
                }
                .map-frame {
                    position: relative;
                    height: 20rem;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .map-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(26, 83, 92, 0.8), transparent);
                    pointer-events: none;
                }
                .map-caption {
                    position: absolute;
                    left: 1.5rem;
                    bottom: 1.5rem;
                    color: #ffffff;
                    pointer-events: none;
                }
                .map-caption h3 {
                    color: #ffffff;
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .map-caption p {
                    margin: 0;
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .join-panel {
                    background: linear-gradient(90deg, #1A535C, #4ECDC4);
                    color: #ffffff;
                    padding: 4rem;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    text-align: center;
                }
                .join-panel h2 {
                    color: #ffffff;
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }
                .join-panel > p {
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .join-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                }
                .join-button {
                    font-weight: 700;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    transition: background 0.2s, color 0.2s;
                }
                .join-button.solid {
                    background: #ffffff;
                    color: #1A535C;
                }
                .join-button.solid:hover {
                    background: #F7F9FA;
                }
                .join-button.outline {
                    border: 2px solid #ffffff;
                    color: #ffffff;
                }
                .join-button.outline:hover {
                    background: #ffffff;
                    color: #1A535C;
                }
                .join-panel .join-footnote {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                    margin: 2rem 0 0;
                }
                @media (max-width: 768px) {
                    .about-hero-content h1 {
                        font-size: 3rem;
                    }
                    .goals-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .goals-figures,
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                    .join-actions {
                        flex-direction: column;
                    }
                    .join-panel {
                        padding: 3rem 1.5rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
