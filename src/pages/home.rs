use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #ffffff, #f8fafc);
                    color: #0f172a;
                }
                .home-hero {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    text-align: center;
                }
                .home-hero h1 {
                    font-size: 2.75rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                }
                .home-hero p {
                    margin-top: 1rem;
                    color: #475569;
                    font-size: 1.05rem;
                    line-height: 1.6;
                }
                .home-actions {
                    margin-top: 2.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                }
                .home-cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    padding: 0.75rem 1.75rem;
                    min-width: 160px;
                    color: #ffffff;
                    background: linear-gradient(90deg, #003459, #007EA7, #00a8e8);
                    box-shadow: 0 10px 18px rgba(0, 56, 84, 0.18);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .home-cta-ghost {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    padding: 0.75rem 1.75rem;
                    min-width: 160px;
                    color: #0f172a;
                    background: #ffffff;
                    border: 1px solid rgba(2, 6, 23, 0.08);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                "#}
            </style>
            <section class="home-hero">
                <h1>{config::BRAND_NAME}</h1>
                <p>{"Social-media growth, brand shoots, and talent casting. Currently casting professional adult models for fashion, commercial, and e-commerce work."}</p>
                <div class="home-actions">
                    <Link<Route> to={Route::Casting} classes="home-cta">
                        {"Apply for Casting"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="home-cta-ghost">
                        {"Book a Call"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
