use log::error;
use yew::prelude::*;

use crate::components::cards::{CtaBanner, ReportLink, StatCard};
use crate::components::chart::{BarChart, Doughnut};
use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{self, Transparency};
use crate::Route;

fn dashboard(data: &Transparency) -> Html {
    html! {
        <>
            <div class="grid-3 stats">
                {
                    for data.stats.iter().map(|stat| html! {
                        <StatCard title={stat.title.clone()} value={stat.value.clone()} />
                    })
                }
            </div>
            <div class="charts">
                <div class="chart-panel allocation reveal-item">
                    <h3>{"Alocação de Recursos"}</h3>
                    <Doughnut shares={data.allocation.clone()} />
                </div>
                <div class="chart-panel revenue reveal-item">
                    <h3>{"Fontes de Receita"}</h3>
                    <BarChart sources={data.revenue.clone()} />
                </div>
            </div>
        </>
    }
}

#[function_component(TransparencyPage)]
pub fn transparency_page() -> Html {
    let data = use_memo(
        |_| {
            content::transparency().map_err(|e| {
                error!("Transparency data unavailable: {}", e);
                e
            })
        },
        (),
    );

    html! {
        <main class="transparency-page">
            <Hero
                title="Nossa Transparência, Sua Confiança"
                description="Acreditamos que a transparência é o fundamento de toda confiança."
            />

            // Dashboard
            <Reveal class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Nosso Desempenho em Dados"}</h2>
                        <p>{"Este é o resumo do nosso último ano."}</p>
                    </div>
                    {
                        match &*data {
                            Ok(data) => dashboard(data),
                            Err(_) => html! {
                                <p class="data-fallback">
                                    {"Os dados de desempenho estão temporariamente indisponíveis. Consulte os relatórios abaixo."}
                                </p>
                            },
                        }
                    }
                </div>
            </Reveal>

            // Reports
            <Reveal class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Biblioteca de Relatórios"}</h2>
                        <p>{"Acesse todos os nossos documentos oficiais."}</p>
                    </div>
                    <div class="reports">
                        if let Ok(data) = &*data {
                            {
                                for data.reports.iter().map(|report| html! {
                                    <ReportLink
                                        title={report.title.clone()}
                                        date={report.date.clone()}
                                        href={report.href.clone()}
                                    />
                                })
                            }
                        }
                    </div>
                </div>
            </Reveal>

            // Governance
            <Reveal class="section section-alt" threshold={0.3}>
                <div class="container grid-2">
                    <div class="split-text reveal-item">
                        <h2>{"Nossa Governança"}</h2>
                        <p>{"Nossa administração é formada por um conselho executivo e um conselho fiscal, compostos por especialistas qualificados."}</p>
                        <a href="/sobre#equipe" class="text-link">{"Conheça nossa equipe →"}</a>
                    </div>
                    <div class="media-frame reveal-item">
                        <img src={config::PLACEHOLDER_IMAGE} alt="Reunião do conselho da FANIBRAS" loading="lazy" />
                    </div>
                </div>
            </Reveal>

            <CtaBanner
                title="Invista com Confiança"
                text="Sua doação apoia diretamente associações verificadas."
                button_text="Seja uma Empresa Parceira"
                to={Route::Donate}
            />

            <style>
                {r#"
                .stats {
                    margin-bottom: 4rem;
                }
                .charts {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 2rem;
                    align-items: stretch;
                }
                .chart-panel {
                    background: #ffffff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .chart-panel h3 {
                    font-size: 1.25rem;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .chart canvas {
                    width: 100%;
                    height: auto;
                }
                .chart-fallback {
                    list-style: none;
                    padding: 0;
                    text-align: center;
                }
                .data-fallback {
                    text-align: center;
                    font-size: 1.125rem;
                    color: rgba(51, 51, 51, 0.8);
                }
                .reports {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                @media (max-width: 768px) {
                    .charts {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
