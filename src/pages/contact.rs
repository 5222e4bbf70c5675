use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, MessageEvent};
use yew::prelude::*;

use gloo_timers::callback::Timeout;

const WIDGET_SRC: &str = "https://assets.calendly.com/assets/external/widget.js";
const BOOKING_URL: &str = "https://calendly.com/alinapopovabusiness/30min";
/// Hide the loader even if the widget never announces itself.
const READY_FALLBACK_MS: u32 = 5_000;

/// Shape of the postMessage events the embed emits. Anything else on the
/// message channel simply fails to decode and is ignored.
#[derive(Deserialize)]
struct WidgetMessage {
    #[serde(default)]
    event: String,
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let cal_loaded = use_state(|| false);

    {
        let cal_loaded = cal_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                // Load the externally hosted widget script.
                let script: HtmlScriptElement = document
                    .create_element("script")
                    .unwrap()
                    .unchecked_into();
                script.set_src(WIDGET_SRC);
                let _ = script.set_attribute("async", "true");
                if let Some(body) = document.body() {
                    let _ = body.append_child(&script);
                }

                let loaded = cal_loaded.clone();
                let on_message = Closure::wrap(Box::new(move |e: MessageEvent| {
                    if let Ok(msg) = serde_wasm_bindgen::from_value::<WidgetMessage>(e.data()) {
                        if msg.event == "calendly:ready" {
                            loaded.set(true);
                        }
                    }
                }) as Box<dyn FnMut(MessageEvent)>);
                window
                    .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
                    .unwrap();

                let loaded = cal_loaded.clone();
                let fallback = Timeout::new(READY_FALLBACK_MS, move || loaded.set(true));

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "message",
                        on_message.as_ref().unchecked_ref(),
                    );
                    if let Some(body) = document.body() {
                        let _ = body.remove_child(&script);
                    }
                    drop(on_message);
                    fallback.cancel();
                }
            },
            (),
        );
    }

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #ffffff, #f1f5f9);
                    color: #0f172a;
                }
                .contact-hero {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem 4rem;
                    text-align: center;
                }
                .contact-hero h2 { font-size: 2.5rem; font-weight: 700; }
                .contact-hero p { margin-top: 1rem; color: #475569; line-height: 1.6; }
                .booking-card {
                    position: relative;
                    margin: 2.5rem auto 0;
                    max-width: 52rem;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    padding: 2rem;
                }
                .booking-loader {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.85);
                }
                .booking-spinner {
                    width: 32px;
                    height: 32px;
                    border: 3px solid rgba(0, 126, 167, 0.25);
                    border-top-color: #007EA7;
                    border-radius: 50%;
                    animation: contact-spin 1s linear infinite;
                }
                @keyframes contact-spin { to { transform: rotate(360deg); } }
                .calendly-inline-widget { width: 100%; min-width: 320px; height: 650px; border-radius: 1rem; }
                .contact-links {
                    margin: 3rem auto 0;
                    max-width: 52rem;
                    padding: 0 1.5rem 4rem;
                    display: grid;
                    gap: 1rem;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }
                @media (max-width: 640px) { .contact-links { grid-template-columns: 1fr; } }
                .contact-card {
                    background: #ffffff;
                    border: 1px solid rgba(0, 0, 0, 0.06);
                    border-radius: 1rem;
                    padding: 1.25rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: left;
                }
                .contact-card h4 { margin: 0 0 0.35rem; font-size: 1rem; }
                .contact-card a { color: #007EA7; text-decoration: none; }
                .contact-card a:hover { text-decoration: underline; }
                "#}
            </style>
            <section class="contact-hero">
                <h2>{"Let's Connect"}</h2>
                <p>{"Whether you're looking to collaborate, have questions, or simply want to chat, pick a slot below."}</p>

                <div class="booking-card">
                    {
                        if !*cal_loaded {
                            html! {
                                <div class="booking-loader">
                                    <span class="booking-spinner"></span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="calendly-inline-widget" data-url={BOOKING_URL}></div>
                </div>
            </section>

            <section class="contact-links">
                <div class="contact-card">
                    <h4>{"Phone"}</h4>
                    <a href="tel:+919510394742">{"+91 95103 94742"}</a>
                </div>
                <div class="contact-card">
                    <h4>{"Email"}</h4>
                    <a href="mailto:alinapopovabusiness@gmail.com">{"alinapopovabusiness@gmail.com"}</a>
                </div>
            </section>
        </div>
    }
}
