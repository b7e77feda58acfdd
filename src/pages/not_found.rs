use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page">
            <div class="container">
                <p class="eyebrow">{"404"}</p>
                <h1>{"Página não encontrada"}</h1>
                <p>{"O conteúdo que você procura ainda está sendo preparado ou mudou de endereço."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Voltar ao Início"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                    padding: 8rem 0 5rem;
                }
                .not-found-page h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .not-found-page p {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </main>
    }
}
