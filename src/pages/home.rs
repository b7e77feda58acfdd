use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::FeatureCard;
use crate::components::counter::Counter;
use crate::components::hero::Hero;
use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::config;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <Hero
                title="Fortalecendo o Impacto, Juntos."
                description="Guiamos associações para criar um hub de serviços e potencializar a transformação social em larga escala."
                button_text="Seja uma Empresa Parceira"
                button_link={Route::Donate}
            />

            // What we do
            <Reveal class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Um Hub para o Bem Maior"}</h2>
                        <p>{"Nossa missão é representar e fortalecer um coletivo de associações, criando uma rede de solidariedade mútua com impacto sustentável."}</p>
                    </div>
                    <div class="grid-3 narrow">
                        <FeatureCard icon={Icon::Users} title="Guiamos Associações">
                            {"Oferecemos a estrutura e o suporte necessários para que projetos de impacto possam crescer e se profissionalizar."}
                        </FeatureCard>
                        <FeatureCard icon={Icon::ChartLine} title="Potencializamos o Impacto">
                            {"Unimos forças para desenvolver projetos de maior escala, gerando benefícios sociais, econômicos e culturais para a sociedade."}
                        </FeatureCard>
                        <FeatureCard icon={Icon::Handshake} title="Conectamos Parceiros">
                            {"Somos a ponte confiável entre empresas que buscam investir em responsabilidade social e projetos que realmente fazem a diferença."}
                        </FeatureCard>
                    </div>
                </div>
            </Reveal>

            // For companies
            <Reveal class="section section-alt" threshold={0.3}>
                <div class="container grid-2">
                    <div class="media-frame reveal-item">
                        <img src={config::PLACEHOLDER_IMAGE} alt="Parceria corporativa para impacto social" loading="lazy" />
                    </div>
                    <div class="split-text reveal-item">
                        <h2>{"Sua Empresa como Catalisadora da Mudança"}</h2>
                        <p>{"Ao doar para a FAMN, sua empresa investe em um portfólio diversificado de projetos auditados, com relatórios de impacto consolidados e total transparência. Fortaleça seu compromisso ESG e transforme a sociedade conosco."}</p>
                        <Link<Route> to={Route::Donate} classes="btn btn-accent">
                            {"Doe Agora"}
                        </Link<Route>>
                    </div>
                </div>
            </Reveal>

            // For associations
            <Reveal class="section" threshold={0.3}>
                <div class="container grid-2">
                    <div class="split-text reveal-item">
                        <h2>{"Seu Projeto Tem Potencial para Crescer?"}</h2>
                        <p>{"Se você lidera uma associação ou projeto de impacto sem CNPJ, junte-se ao nosso coletivo. Oferecemos o suporte necessário para você se formalizar, captar mais recursos e ampliar seu alcance."}</p>
                        <Link<Route> to={Route::Contact} classes="text-link">
                            {"Filie-se a Nós →"}
                        </Link<Route>>
                    </div>
                    <div class="media-frame reveal-item">
                        <img src={config::PLACEHOLDER_IMAGE} alt="Projetos comunitários fortalecidos pela FAMN" loading="lazy" />
                    </div>
                </div>
            </Reveal>

            // Collective impact
            <div class="impact-wrapper section-alt">
                <div class="container">
                    <Reveal class="impact-panel" threshold={0.5}>
                        <h2>{"Nosso Impacto Coletivo"}</h2>
                        <div class="grid-3">
                            <Counter to={20} prefix="+" label="Associações Fortalecidas" />
                            <Counter to={50} prefix="+" label="Projetos Impulsionados" />
                            <Counter to={10000} prefix="+" label="Vidas Alcançadas" />
                        </div>
                    </Reveal>
                </div>
            </div>

            // Leadership
            <Reveal class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Liderança Estratégica"}</h2>
                        <p>{"Uma equipe comprometida com a gestão transparente e o crescimento sustentável do nosso coletivo."}</p>
                    </div>
                    <div class="leaders">
                        <div class="leader reveal-item">
                            <img src={config::PLACEHOLDER_IMAGE} alt="Foto de Diana Santos" width="150" height="150" />
                            <h3>{"Diana Santos"}</h3>
                            <p>{"Presidente"}</p>
                        </div>
                        <div class="leader reveal-item">
                            <img src={config::PLACEHOLDER_IMAGE} alt="Foto de Alexander" width="150" height="150" />
                            <h3>{"Alexander (Xander 360)"}</h3>
                            <p>{"Chanceler"}</p>
                        </div>
                    </div>
                </div>
            </Reveal>

            <style>
                {r#"
                .impact-wrapper {
                    padding-top: 5rem;
                }
                .impact-panel {
                    background: #1A535C;
                    color: #ffffff;
                    padding: 5rem 1rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    text-align: center;
                }
                .impact-panel h2 {
                    color: #ffffff;
                    font-size: 2.25rem;
                    margin-bottom: 3rem;
                }
                .leaders {
                    display: flex;
                    justify-content: center;
                    align-items: flex-start;
                    flex-wrap: wrap;
                    gap: 3rem;
                }
                .leader {
                    text-align: center;
                }
                .leader img {
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                    object-fit: cover;
                }
                .leader h3 {
                    font-size: 1.5rem;
                }
                .leader p {
                    font-weight: 600;
                    color: rgba(26, 83, 92, 0.8);
                    margin: 0;
                }
                "#}
            </style>
        </main>
    }
}
