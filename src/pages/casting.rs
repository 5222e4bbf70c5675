use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;

use crate::casting::form::{
    ApplicationForm, Experience, FieldId, FormAction, NudePreference, CATEGORY_OPTIONS,
    COMFORT_LEVELS, MOOD_OPTIONS,
};
use crate::casting::links::split_link_tokens;
use crate::casting::payload::{self, BrowserEnv, SubmissionPayload};
use crate::casting::steps::{self, FieldStatus, STEP_LABELS, TOTAL_REQUIRED, TOTAL_STEPS};
use crate::casting::storage;
use crate::casting::submit;
use crate::casting::validators;
use crate::casting::wizard::Wizard;
use crate::config;

const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't submit to the server. You can still send your application via WhatsApp below.";
const UNDERAGE_MESSAGE: &str = "You must be 18+. Please add your Date of Birth in Basics.";

fn focus_field(dom_id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(dom_id) else {
        return;
    };
    if let Some(html_el) = element.dyn_ref::<HtmlElement>() {
        let _ = html_el.focus();
    }
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn scroll_to_form() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id("casting-form") {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn status_class(status: FieldStatus) -> Classes {
    classes!(
        "field-input",
        match status {
            FieldStatus::Error => Some("invalid"),
            FieldStatus::Success => Some("valid"),
            FieldStatus::Neutral => None,
        }
    )
}

#[allow(clippy::too_many_arguments)]
fn text_field(
    id: FieldId,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
    required: bool,
    status: FieldStatus,
    error: Option<String>,
    hint: Option<String>,
    onchange: Callback<Event>,
    onblur: Callback<FocusEvent>,
) -> Html {
    html! {
        <div class="field">
            <label for={id.dom_id()}>
                {id.label()}
                { if required { html! { <span class="req">{" *"}</span> } } else { html! {} } }
            </label>
            <input
                id={id.dom_id()}
                name={id.dom_id()}
                type={input_type}
                class={status_class(status)}
                value={value}
                placeholder={placeholder}
                onchange={onchange}
                onblur={onblur}
            />
            {
                if let Some(message) = error {
                    html! { <p class="field-error">{message}</p> }
                } else if let Some(hint) = hint {
                    html! { <p class="field-hint">{hint}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn textarea_field(
    id: FieldId,
    value: String,
    placeholder: &'static str,
    required: bool,
    maxlength: Option<usize>,
    status: FieldStatus,
    error: Option<String>,
    hint: Option<String>,
    oninput: Callback<InputEvent>,
    onblur: Callback<FocusEvent>,
) -> Html {
    html! {
        <div class="field">
            <label for={id.dom_id()}>
                {id.label()}
                { if required { html! { <span class="req">{" *"}</span> } } else { html! {} } }
            </label>
            <textarea
                id={id.dom_id()}
                name={id.dom_id()}
                class={status_class(status)}
                value={value}
                placeholder={placeholder}
                maxlength={maxlength.map(|m| m.to_string())}
                oninput={oninput}
                onblur={onblur}
            />
            {
                if let Some(message) = error {
                    html! { <p class="field-error">{message}</p> }
                } else if let Some(hint) = hint {
                    html! { <p class="field-hint">{hint}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(CastingPage)]
pub fn casting_page() -> Html {
    let form = use_reducer(ApplicationForm::default);
    let wizard = use_state(Wizard::default);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let show_summary = use_state(|| false);
    let just_saved = use_state(|| false);
    let hydrated = use_state(|| false);

    // Restore a previously saved application once, then start autosaving.
    {
        let form = form.clone();
        let hydrated = hydrated.clone();
        use_effect_once(move || {
            if let Some(saved) = storage::restore() {
                form.dispatch(FormAction::Restore(saved));
            }
            hydrated.set(true);
            || ()
        });
    }

    {
        let hydrated = hydrated.clone();
        let wizard = wizard.clone();
        use_effect_with_deps(
            move |form: &ApplicationForm| {
                if *hydrated && !wizard.submitted {
                    storage::save(form);
                }
                || ()
            },
            (*form).clone(),
        );
    }

    // Per-field plumbing: change dispatches into the reducer, blur marks
    // the field touched so its status can show.
    let change = {
        let form = form.clone();
        move |id: FieldId| -> Callback<Event> {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(action) = FormAction::for_text(id, input.value()) {
                    form.dispatch(action);
                }
            })
        }
    };
    let input_change = {
        let form = form.clone();
        move |id: FieldId| -> Callback<InputEvent> {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                if let Some(action) = FormAction::for_text(id, area.value()) {
                    form.dispatch(action);
                }
            })
        }
    };
    let blur = {
        let wizard = wizard.clone();
        move |id: FieldId| -> Callback<FocusEvent> {
            let wizard = wizard.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = (*wizard).clone();
                next.touch(id);
                wizard.set(next);
            })
        }
    };

    let status = |id: FieldId| steps::status_of(&form, &wizard.touched, id);
    let error_of = |id: FieldId| {
        if wizard.touched.contains(&id) {
            steps::field_message(&form, id)
        } else {
            None
        }
    };

    let link_parse = split_link_tokens(&form.image_links);
    let links_valid = (validators::MIN_LINKS..=validators::MAX_LINKS)
        .contains(&link_parse.valid.len());
    let wa_href = payload::whatsapp_href(
        &form,
        link_parse.chips(),
        config::get_whatsapp_number(),
    );
    let step_error_list = steps::step_errors(&form, wizard.step);
    let step_progress = ((wizard.step + 1) * 100 / TOTAL_STEPS).max(6);
    let required_done = steps::required_filled(&form);

    let go_next = {
        let form = form.clone();
        let wizard = wizard.clone();
        let error = error.clone();
        let show_summary = show_summary.clone();
        let just_saved = just_saved.clone();
        Callback::from(move |_: ()| {
            let mut next = (*wizard).clone();
            match next.advance(&form) {
                Ok(()) => {
                    error.set(None);
                    show_summary.set(false);
                    just_saved.set(false);
                }
                Err(errors) => {
                    show_summary.set(true);
                    if let Some(first) = errors.first() {
                        focus_field(first.id.dom_id());
                    }
                }
            }
            wizard.set(next);
        })
    };
    let go_back = {
        let wizard = wizard.clone();
        let just_saved = just_saved.clone();
        Callback::from(move |_: ()| {
            let mut next = (*wizard).clone();
            next.retreat();
            wizard.set(next);
            just_saved.set(false);
        })
    };

    let on_save_exit = {
        let form = form.clone();
        let just_saved = just_saved.clone();
        Callback::from(move |_: MouseEvent| {
            storage::save(&form);
            just_saved.set(true);
            scroll_to_top();
            let just_saved = just_saved.clone();
            spawn_local(async move {
                TimeoutFuture::new(4_000).await;
                just_saved.set(false);
            });
        })
    };

    let on_toggle_nude = {
        let form = form.clone();
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if !form.is_adult {
                let mut next = (*wizard).clone();
                next.touch(FieldId::Dob);
                wizard.set(next);
                error.set(Some(UNDERAGE_MESSAGE.to_string()));
                focus_field(FieldId::Dob.dom_id());
                return;
            }
            error.set(None);
            let turn_on = !form.open_to_nude;
            form.dispatch(FormAction::SetOpenToNude(turn_on));
        })
    };

    let on_keydown = {
        let wizard = wizard.clone();
        let go_next = go_next.clone();
        let go_back = go_back.clone();
        Callback::from(move |e: KeyboardEvent| {
            let tag = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.tag_name().to_ascii_lowercase())
                .unwrap_or_default();
            if tag == "textarea" || e.key() != "Enter" {
                return;
            }
            e.prevent_default();
            if e.shift_key() {
                if wizard.step > 0 {
                    go_back.emit(());
                }
            } else if wizard.step < TOTAL_STEPS - 1 {
                go_next.emit(());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let wizard = wizard.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let show_summary = show_summary.clone();
        let just_saved = just_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting || wizard.submitted {
                return;
            }

            let mut next = (*wizard).clone();
            next.touch_all(&form);
            show_summary.set(true);
            let errors = steps::form_errors(&form);
            if !errors.is_empty() {
                if let Some(first) = errors.first() {
                    focus_field(first.id.dom_id());
                }
                wizard.set(next);
                return;
            }
            wizard.set(next);
            error.set(None);
            submitting.set(true);

            let parse = split_link_tokens(&form.image_links);
            let request =
                SubmissionPayload::new(&form, parse.valid.clone(), BrowserEnv::capture());

            let form = form.clone();
            let wizard = wizard.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let show_summary = show_summary.clone();
            let just_saved = just_saved.clone();
            spawn_local(async move {
                match submit::deliver(config::get_casting_endpoint(), &request).await {
                    Ok(()) => {
                        let mut done = (*wizard).clone();
                        done.complete();
                        wizard.set(done);
                        form.dispatch(FormAction::Reset);
                        storage::clear();
                        show_summary.set(false);
                        just_saved.set(false);
                        error.set(None);
                        scroll_to_top();
                    }
                    Err(detail) => {
                        log!("casting submission failed:", detail);
                        error.set(Some(SUBMIT_FAILED_MESSAGE.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let visible_comfort_levels = COMFORT_LEVELS
        .iter()
        .filter(|level| form.open_to_nude || !level.contains("Nude"))
        .copied()
        .collect::<Vec<_>>();
    let show_safety_note = form.open_to_nude
        && (matches!(
            form.nude_preference,
            NudePreference::Implied | NudePreference::Artistic
        ) || form.comfort_levels.iter().any(|l| l.contains("Nude")));

    let step_body = match wizard.step {
        0 => html! {
            <>
                <h3 class="step-title">{"Basics"}</h3>
                <div class="field-grid">
                    { text_field(
                        FieldId::FullName, "text", form.full_name.clone(), "Your legal name", true,
                        status(FieldId::FullName), error_of(FieldId::FullName), None,
                        change(FieldId::FullName), blur(FieldId::FullName)) }
                    { text_field(
                        FieldId::City, "text", form.city.clone(), "Mumbai / Bengaluru / Ahmedabad", true,
                        status(FieldId::City), error_of(FieldId::City), None,
                        change(FieldId::City), blur(FieldId::City)) }
                    { text_field(
                        FieldId::Email, "email", form.email.clone(), "name@example.com", true,
                        status(FieldId::Email), error_of(FieldId::Email), None,
                        change(FieldId::Email), blur(FieldId::Email)) }
                    { text_field(
                        FieldId::Dob, "date", form.dob.clone(), "", true,
                        status(FieldId::Dob), error_of(FieldId::Dob), None,
                        change(FieldId::Dob), blur(FieldId::Dob)) }
                </div>
            </>
        },
        1 => html! {
            <>
                <h3 class="step-title">{"Portfolio & Availability"}</h3>
                <div class="field-grid">
                    { text_field(
                        FieldId::PortfolioUrl, "url",
                        form.portfolio_url.clone().unwrap_or_default(), "https://...", false,
                        status(FieldId::PortfolioUrl), error_of(FieldId::PortfolioUrl),
                        Some(match form.portfolio_url.as_deref() {
                            None => "Optional — if you don't have a site, just paste image links later".to_string(),
                            Some(url) if !validators::url_ok(url) => "Add https://".to_string(),
                            Some(_) => "Looks good".to_string(),
                        }),
                        change(FieldId::PortfolioUrl), blur(FieldId::PortfolioUrl)) }
                    { text_field(
                        FieldId::Availability, "text", form.availability.clone(),
                        "e.g., 28–30 Sept, flexible", true,
                        status(FieldId::Availability), error_of(FieldId::Availability), None,
                        change(FieldId::Availability), blur(FieldId::Availability)) }
                    { text_field(
                        FieldId::Phone, "tel", form.phone.clone().unwrap_or_default(), "Optional", false,
                        status(FieldId::Phone), error_of(FieldId::Phone), None,
                        change(FieldId::Phone), blur(FieldId::Phone)) }
                    <div class="field">
                        <label for={FieldId::Experience.dom_id()}>{FieldId::Experience.label()}</label>
                        <select
                            id={FieldId::Experience.dom_id()}
                            name={FieldId::Experience.dom_id()}
                            class="field-input"
                            onchange={let form = form.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                form.dispatch(FormAction::SetExperience(Experience::from_key(&select.value())));
                            }}
                        >
                            {
                                [Experience::Starter, Experience::Intermediate, Experience::Agency]
                                    .iter()
                                    .map(|level| html! {
                                        <option value={level.key()} selected={*level == form.experience}>
                                            {level.label()}
                                        </option>
                                    })
                                    .collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
            </>
        },
        2 => html! {
            <>
                <h3 class="step-title">{"Measurements (optional)"}</h3>
                <div class="field-grid four">
                    { text_field(
                        FieldId::HeightCm, "text", form.height_cm.clone().unwrap_or_default(), "170", false,
                        status(FieldId::HeightCm), None, None,
                        change(FieldId::HeightCm), blur(FieldId::HeightCm)) }
                    { text_field(
                        FieldId::Chest, "text", form.chest.clone().unwrap_or_default(), "34", false,
                        status(FieldId::Chest), None, None,
                        change(FieldId::Chest), blur(FieldId::Chest)) }
                    { text_field(
                        FieldId::Waist, "text", form.waist.clone().unwrap_or_default(), "26", false,
                        status(FieldId::Waist), None, None,
                        change(FieldId::Waist), blur(FieldId::Waist)) }
                    { text_field(
                        FieldId::Hips, "text", form.hips.clone().unwrap_or_default(), "36", false,
                        status(FieldId::Hips), None, None,
                        change(FieldId::Hips), blur(FieldId::Hips)) }
                </div>
            </>
        },
        3 => html! {
            <>
                <h3 class="step-title">{"Categories & Moods"}</h3>
                <div class="field">
                    <label>{"Categories (select all that apply)"}</label>
                    <div class="pill-row">
                        {
                            CATEGORY_OPTIONS.iter().map(|category| {
                                let selected = form.categories.iter().any(|c| c == category);
                                let onclick = {
                                    let form = form.clone();
                                    let category = category.to_string();
                                    Callback::from(move |_: MouseEvent| {
                                        form.dispatch(FormAction::ToggleCategory(category.clone()));
                                    })
                                };
                                html! {
                                    <button type="button"
                                        class={classes!("pill", selected.then_some("selected"))}
                                        onclick={onclick}>
                                        {*category}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="field">
                    <label>{"Moods (optional)"}</label>
                    <div class="mood-grid">
                        {
                            MOOD_OPTIONS.iter().map(|(key, label)| {
                                let selected = form.moods.iter().any(|m| m == key);
                                let onclick = {
                                    let form = form.clone();
                                    let key = key.to_string();
                                    Callback::from(move |_: MouseEvent| {
                                        form.dispatch(FormAction::ToggleMood(key.clone()));
                                    })
                                };
                                html! {
                                    <button type="button"
                                        class={classes!("mood-tile", selected.then_some("selected"))}
                                        onclick={onclick}>
                                        {*label}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="field-grid">
                    { text_field(
                        FieldId::DressSize, "text", form.dress_size.clone().unwrap_or_default(), "", false,
                        status(FieldId::DressSize), None, None,
                        change(FieldId::DressSize), blur(FieldId::DressSize)) }
                    { text_field(
                        FieldId::ShoeSize, "text", form.shoe_size.clone().unwrap_or_default(), "", false,
                        status(FieldId::ShoeSize), None, None,
                        change(FieldId::ShoeSize), blur(FieldId::ShoeSize)) }
                </div>
            </>
        },
        4 => html! {
            <>
                <h3 class="step-title">{"Wardrobe Comfort & Nude Photography"}</h3>
                <div class="opt-in-card">
                    <div class="opt-in-copy">
                        <div class="opt-in-title">{"Nude photography (optional)"}</div>
                        <p class="field-hint">
                            {"Enable only if comfortable. 18+ required. Non-sexual, India-compliant content only."}
                        </p>
                        {
                            if !form.is_adult {
                                html! {
                                    <p class="field-error">
                                        {"Add your Date of Birth in Basics to enable this (18+ only)."}
                                    </p>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button type="button"
                        id={FieldId::OpenToNude.dom_id()}
                        role="switch"
                        aria-checked={form.open_to_nude.to_string()}
                        class={classes!("switch", form.open_to_nude.then_some("on"))}
                        onclick={on_toggle_nude}>
                        <span class="switch-knob"></span>
                    </button>
                </div>
                <div class="field">
                    <label>{"Comfort levels (select all that apply)"}</label>
                    <p class="field-hint">{"Choose only what you're comfortable with."}</p>
                    <div class="pill-row">
                        {
                            visible_comfort_levels.iter().map(|level| {
                                let selected = form.comfort_levels.iter().any(|l| l == level);
                                let onclick = {
                                    let form = form.clone();
                                    let level = level.to_string();
                                    Callback::from(move |_: MouseEvent| {
                                        form.dispatch(FormAction::ToggleComfortLevel(level.clone()));
                                    })
                                };
                                html! {
                                    <button type="button"
                                        class={classes!("pill", selected.then_some("selected"))}
                                        onclick={onclick}>
                                        {*level}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                {
                    if form.open_to_nude {
                        html! {
                            <div class="field-grid">
                                <div class="field">
                                    <label for={FieldId::NudePreference.dom_id()}>
                                        {"Nudity preference (India-compliant)"}
                                    </label>
                                    <select
                                        id={FieldId::NudePreference.dom_id()}
                                        name={FieldId::NudePreference.dom_id()}
                                        class="field-input"
                                        onchange={let form = form.clone(); move |e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            form.dispatch(FormAction::SetNudePreference(
                                                NudePreference::from_key(&select.value())));
                                        }}
                                    >
                                        <option value="implied" selected={form.nude_preference == NudePreference::Implied}>
                                            {"Implied nude (covered)"}
                                        </option>
                                        <option value="artistic" selected={form.nude_preference == NudePreference::Artistic}>
                                            {"Artistic nude (non-sexual)"}
                                        </option>
                                        <option value="unspecified" selected={form.nude_preference == NudePreference::Unspecified}>
                                            {"Prefer not to say"}
                                        </option>
                                    </select>
                                    <p class="field-hint">
                                        {"18+ only • non-sexual content • closed set available • usage only with written consent."}
                                    </p>
                                </div>
                                <div class="field">
                                    <label class="checkbox-row">
                                        <input type="checkbox"
                                            id={FieldId::NudeConsent.dom_id()}
                                            name={FieldId::NudeConsent.dom_id()}
                                            checked={form.nude_consent}
                                            onchange={let form = form.clone(); move |e: Event| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                form.dispatch(FormAction::SetNudeConsent(input.checked()));
                                            }}
                                        />
                                        <span>{"I confirm I'm 18+ and I consent to the selected non-sexual nudity levels."}</span>
                                    </label>
                                    {
                                        if let Some(message) = error_of(FieldId::NudeConsent) {
                                            html! { <p class="field-error">{message}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if show_safety_note {
                        html! {
                            <div class="banner info">
                                <p>
                                    <strong>{"Safety & legal (India): "}</strong>
                                    {"18+ only; non-sexual content; no obscene/illegal material; closed set on request; usage per written consent."}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        },
        5 => html! {
            <>
                <h3 class="step-title">{"Image Links & Notes"}</h3>
                { text_field(
                    FieldId::Instagram, "text", form.instagram.clone().unwrap_or_default(),
                    "@username or link", false,
                    status(FieldId::Instagram), None,
                    Some(match form.instagram.as_deref() {
                        None => "Optional".to_string(),
                        Some(handle) if handle.starts_with('@') || handle.starts_with("http") =>
                            "Looks good".to_string(),
                        Some(_) => "Start with @username or https://...".to_string(),
                    }),
                    change(FieldId::Instagram), blur(FieldId::Instagram)) }
                { textarea_field(
                    FieldId::ImageLinks, form.image_links.clone(),
                    "https://drive.google.com/...\nhttps://yourportfolio.com/...\nhttps://www.instagram.com/p/...",
                    true, None,
                    status(FieldId::ImageLinks), error_of(FieldId::ImageLinks),
                    Some("Paste 3–6 public links. Use commas, spaces, or new lines. Only http(s) links are counted. Duplicates are ignored.".to_string()),
                    input_change(FieldId::ImageLinks), blur(FieldId::ImageLinks)) }
                {
                    if !link_parse.valid.is_empty() {
                        html! {
                            <div class="chip-row" aria-live="polite">
                                {
                                    link_parse.chips().iter().map(|link| html! {
                                        <a class="chip" href={link.clone()} target="_blank" rel="noreferrer">
                                            {link.clone()}
                                        </a>
                                    }).collect::<Html>()
                                }
                                <span class={classes!("chip-count", (!links_valid).then_some("invalid"))}>
                                    {format!("{} detected", link_parse.chips().len())}
                                </span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if !link_parse.invalid.is_empty() {
                        html! {
                            <div class="banner warn">
                                <strong>{"Ignored: "}</strong>
                                {link_parse.ignored_summary()}
                                <span class="field-hint">{" (must start with http:// or https://)"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if form.open_to_nude {
                        textarea_field(
                            FieldId::PrivacyNotes, form.privacy_notes.clone().unwrap_or_default(),
                            " ", false, None,
                            status(FieldId::PrivacyNotes), None,
                            Some("Closed set, no BTS, specific boundaries".to_string()),
                            input_change(FieldId::PrivacyNotes), blur(FieldId::PrivacyNotes))
                    } else {
                        html! {}
                    }
                }
                { textarea_field(
                    FieldId::Message, form.message.clone().unwrap_or_default(),
                    " ", false, Some(validators::MESSAGE_MAX),
                    status(FieldId::Message), error_of(FieldId::Message),
                    Some("Conflicts, travel, special skills".to_string()),
                    input_change(FieldId::Message), blur(FieldId::Message)) }
                <div class="char-count">
                    {format!(
                        "{}/{}",
                        form.message.as_deref().unwrap_or_default().chars().count(),
                        validators::MESSAGE_MAX
                    )}
                </div>
            </>
        },
        _ => html! {
            <>
                <h3 class="step-title">{"Policies & Review"}</h3>
                <div class="field">
                    <span class={classes!("eligibility-tag", (!form.is_adult).then_some("blocked"))}>
                        { if form.is_adult { "18+ verified from DOB" } else { "Under 18 — not eligible" } }
                    </span>
                    {
                        if !form.dob.is_empty() {
                            html! { <span class="field-hint">{format!(" DOB: {}", form.dob)}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="field">
                    <label class="checkbox-row">
                        <input type="checkbox"
                            id={FieldId::PoshConsent.dom_id()}
                            name={FieldId::PoshConsent.dom_id()}
                            checked={form.posh_consent}
                            onchange={let form = form.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                form.dispatch(FormAction::SetPoshConsent(input.checked()));
                            }}
                        />
                        <span>{"I agree to a professional, respectful working environment and the code of conduct on set."}</span>
                    </label>
                    {
                        if let Some(message) = error_of(FieldId::PoshConsent) {
                            html! { <p class="field-error">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="review-card">
                    <div class="review-title">{"Quick review"}</div>
                    <ul class="review-grid">
                        <li><strong>{"Name: "}</strong>{ if form.full_name.is_empty() { "—".to_string() } else { form.full_name.clone() } }</li>
                        <li><strong>{"City: "}</strong>{ if form.city.is_empty() { "—".to_string() } else { form.city.clone() } }</li>
                        <li><strong>{"Email: "}</strong>{ if form.email.is_empty() { "—".to_string() } else { form.email.clone() } }</li>
                        <li><strong>{"Age: "}</strong>{
                            if form.dob.is_empty() {
                                "—".to_string()
                            } else {
                                format!("{} ({})", validators::age_from_dob(&form.dob), form.dob)
                            }
                        }</li>
                        <li><strong>{"Portfolio: "}</strong>{ form.portfolio_url.clone().unwrap_or_else(|| "—".to_string()) }</li>
                        <li><strong>{"Availability: "}</strong>{ if form.availability.is_empty() { "—".to_string() } else { form.availability.clone() } }</li>
                        <li><strong>{"Categories: "}</strong>{ if form.categories.is_empty() { "—".to_string() } else { form.categories.join(", ") } }</li>
                        <li><strong>{"Comfort: "}</strong>{ if form.comfort_levels.is_empty() { "—".to_string() } else { form.comfort_levels.join(", ") } }</li>
                        <li><strong>{"Nude: "}</strong>{
                            if form.open_to_nude {
                                format!("Yes — {}", form.nude_preference.display())
                            } else {
                                "No".to_string()
                            }
                        }</li>
                    </ul>
                </div>
            </>
        },
    };

    html! {
        <div class="casting-page">
            <style>
                {r#"
                .casting-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #ffffff, #f8fafc);
                    color: #0f172a;
                    padding-bottom: 4rem;
                }
                .casting-hero {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem 3rem;
                    text-align: center;
                }
                .casting-hero .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    background: rgba(255, 255, 255, 0.7);
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .casting-hero h1 {
                    margin-top: 1.5rem;
                    font-size: 2.5rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                }
                .casting-hero p {
                    margin-top: 1rem;
                    color: #475569;
                    line-height: 1.6;
                }
                .hero-actions {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                }
                .cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    min-width: 160px;
                    color: #ffffff;
                    background: linear-gradient(90deg, #003459, #007EA7, #00a8e8);
                    box-shadow: 0 10px 18px rgba(0, 56, 84, 0.18);
                    cursor: pointer;
                    font-size: 0.95rem;
                    transition: transform 0.15s ease, opacity 0.15s ease;
                }
                .cta:hover { transform: translateY(-1px); }
                .cta:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
                .cta-ghost {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    min-width: 160px;
                    color: #0f172a;
                    background: #ffffff;
                    border: 1px solid rgba(2, 6, 23, 0.08);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
                    cursor: pointer;
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .form-card {
                    max-width: 48rem;
                    margin: 0 auto;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    border-radius: 1rem;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    overflow: hidden;
                }
                .progress-track { height: 4px; background: #e2e8f0; }
                .progress-fill {
                    height: 4px;
                    background: linear-gradient(to right, #10b981, #00a8e8, #10b981);
                    transition: width 0.25s ease;
                }
                .form-body { padding: 1.5rem; }
                .form-body h2 { font-size: 1.5rem; font-weight: 600; }
                .form-intro { margin-top: 0.5rem; font-size: 0.875rem; color: #475569; }
                .step-meta {
                    margin-top: 1.25rem;
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    color: #475569;
                }
                .step-dots { display: flex; gap: 0.25rem; }
                .step-dot { height: 6px; width: 24px; border-radius: 9999px; background: #e2e8f0; }
                .step-dot.filled { background: #059669; }
                .stepper { display: flex; gap: 0.5rem; overflow-x: auto; padding: 0.75rem 0; margin: 0.75rem 0; list-style: none; }
                .stepper button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.375rem 0.75rem;
                    font-size: 0.75rem;
                    white-space: nowrap;
                    background: #ffffff;
                    color: #334155;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }
                .stepper button.active { background: #059669; color: #ffffff; border-color: #059669; }
                .stepper button.done { background: #ecfdf5; color: #047857; border-color: #a7f3d0; }
                .stepper button:disabled { opacity: 0.6; cursor: not-allowed; }
                .step-title { font-size: 1.1rem; font-weight: 600; margin: 1rem 0 0.75rem; }
                .field-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; }
                .field-grid.four { grid-template-columns: repeat(4, minmax(0, 1fr)); }
                @media (max-width: 640px) {
                    .field-grid, .field-grid.four { grid-template-columns: 1fr; }
                }
                .field { margin: 0.5rem 0; }
                .field label { display: block; font-size: 0.8rem; font-weight: 500; color: #475569; margin-bottom: 0.3rem; }
                .field .req { color: #e11d48; }
                .field-input {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.75rem;
                    background: #ffffff;
                    color: #0f172a;
                    font-size: 0.875rem;
                    padding: 0.65rem 0.75rem;
                    outline: none;
                    transition: border-color 0.15s ease, box-shadow 0.15s ease;
                }
                .field-input:focus { border-color: rgba(0, 0, 0, 0.3); box-shadow: 0 0 0 2px rgba(0, 0, 0, 0.08); }
                .field-input.invalid { border-color: #fb7185; background: rgba(255, 241, 242, 0.4); }
                .field-input.valid { border-color: #34d399; }
                textarea.field-input { min-height: 6rem; resize: vertical; }
                .field-hint { margin-top: 0.25rem; font-size: 0.75rem; color: #64748b; }
                .field-error { margin-top: 0.25rem; font-size: 0.75rem; color: #e11d48; }
                .char-count { text-align: right; font-size: 0.7rem; color: #64748b; margin-top: -0.25rem; }
                .pill-row { display: flex; flex-wrap: wrap; gap: 0.6rem; }
                .pill {
                    border-radius: 9999px;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    background: #ffffff;
                    color: #334155;
                    padding: 0.4rem 0.9rem;
                    font-size: 0.8rem;
                    cursor: pointer;
                }
                .pill.selected { background: #059669; border-color: #059669; color: #ffffff; }
                .mood-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 0.75rem; }
                @media (max-width: 640px) { .mood-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
                .mood-tile {
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.75rem;
                    background: #ffffff;
                    color: #334155;
                    padding: 1.1rem 0.5rem;
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .mood-tile.selected { border-color: #059669; background: #ecfdf5; color: #047857; }
                .opt-in-card {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.75rem;
                    background: #ffffff;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }
                .opt-in-title { font-size: 0.875rem; font-weight: 500; }
                .switch {
                    position: relative;
                    width: 46px;
                    height: 26px;
                    flex: none;
                    border-radius: 9999px;
                    border: 1px solid rgba(0, 0, 0, 0.15);
                    background: #e2e8f0;
                    cursor: pointer;
                    transition: background 0.15s ease;
                }
                .switch .switch-knob {
                    position: absolute;
                    top: 2px;
                    left: 2px;
                    width: 20px;
                    height: 20px;
                    border-radius: 9999px;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.2);
                    transition: transform 0.15s ease;
                }
                .switch.on { background: #059669; border-color: #059669; }
                .switch.on .switch-knob { transform: translateX(20px); }
                .checkbox-row { display: flex; align-items: flex-start; gap: 0.75rem; font-size: 0.875rem; }
                .checkbox-row input { margin-top: 0.2rem; }
                .chip-row { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; }
                .chip {
                    display: inline-flex;
                    max-width: 100%;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #334155;
                    padding: 0.3rem 0.75rem;
                    font-size: 0.75rem;
                    text-decoration: none;
                }
                .chip-count {
                    border-radius: 9999px;
                    padding: 0.25rem 0.6rem;
                    font-size: 0.7rem;
                    background: #ecfdf5;
                    color: #047857;
                    border: 1px solid #a7f3d0;
                }
                .chip-count.invalid { background: #fff1f2; color: #be123c; border-color: #fecdd3; }
                .banner { border-radius: 0.6rem; padding: 0.75rem 1rem; margin: 1rem 0; font-size: 0.85rem; }
                .banner.error { border: 1px solid #fecdd3; background: #fff1f2; color: #881337; }
                .banner.success { border: 1px solid #a7f3d0; background: #ecfdf5; color: #065f46; }
                .banner.warn { border: 1px solid #fde68a; background: #fffbeb; color: #92400e; }
                .banner.info { border: 1px solid #a7f3d0; background: #ecfdf5; color: #065f46; }
                .banner ul { margin: 0.5rem 0 0; padding-left: 1rem; }
                .banner li { display: flex; justify-content: space-between; gap: 0.75rem; margin-top: 0.35rem; }
                .goto-button {
                    flex: none;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.4rem;
                    background: rgba(255, 255, 255, 0.7);
                    color: #1e293b;
                    font-size: 0.7rem;
                    padding: 0.2rem 0.5rem;
                    cursor: pointer;
                }
                .eligibility-tag {
                    display: inline-flex;
                    border-radius: 9999px;
                    padding: 0.25rem 0.6rem;
                    font-size: 0.75rem;
                    background: #ecfdf5;
                    color: #047857;
                    border: 1px solid #a7f3d0;
                }
                .eligibility-tag.blocked { background: #fff1f2; color: #be123c; border-color: #fecdd3; }
                .review-card { border: 1px solid rgba(0, 0, 0, 0.1); border-radius: 0.75rem; background: #ffffff; padding: 1rem; margin-top: 1rem; font-size: 0.875rem; }
                .review-title { font-weight: 500; margin-bottom: 0.5rem; }
                .review-grid { list-style: none; margin: 0; padding: 0; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.25rem 1rem; }
                @media (max-width: 640px) { .review-grid { grid-template-columns: 1fr; } }
                .wizard-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    padding-top: 1rem;
                }
                .secondary-button {
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.6rem;
                    background: #ffffff;
                    color: #334155;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .secondary-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .footer-note {
                    max-width: 48rem;
                    margin: 2.5rem auto 0;
                    padding: 1.5rem;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    border-radius: 1rem;
                    background: linear-gradient(to bottom, #ffffff, #f8fafc);
                    text-align: center;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: grid;
                    place-items: center;
                    background: rgba(0, 0, 0, 0.4);
                    padding: 1.5rem;
                }
                .modal {
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 1rem;
                    background: #ffffff;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                }
                .modal h3 { font-size: 1.1rem; font-weight: 600; }
                .modal p { margin-top: 0.25rem; font-size: 0.875rem; color: #475569; }
                .modal-actions { margin-top: 1.25rem; display: flex; justify-content: center; gap: 0.5rem; flex-wrap: wrap; }
                "#}
            </style>

            <section class="casting-hero">
                <span class="badge">{"Casting Call • India"}</span>
                <h1>{"Become a Star — Fashion, Commercial & E-com"}</h1>
                <p>
                    {"Bring your modeling vision to life. Paid day rates • Web & Social usage • Safe, respectful, India-compliant sets • All looks welcome."}
                </p>
                <div class="hero-actions">
                    <button type="button" class="cta" onclick={Callback::from(|_: MouseEvent| scroll_to_form())}>
                        {"Apply Now"}
                    </button>
                    {
                        if let Some(href) = wa_href.clone() {
                            html! {
                                <a class="cta-ghost" href={href} target="_blank" rel="noreferrer">
                                    {"Quick Apply on WhatsApp"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <p class="field-hint">{"You'll get a response within 1 business day."}</p>
            </section>

            <section>
                <div class="form-card">
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {step_progress}%")}></div>
                    </div>
                    <div class="form-body">
                        <h2>{"Apply for Casting"}</h2>
                        <p class="form-intro">
                            {format!(
                                "Please complete all required fields ({required_done}/{TOTAL_REQUIRED} done). Share 3–6 public links to recent images (Drive/portfolio/IG posts)."
                            )}
                        </p>

                        {
                            if wizard.submitted {
                                html! {
                                    <div class="banner success" role="status" aria-live="polite">
                                        <p><strong>{"Application received."}</strong></p>
                                        <p>{"We'll review and get back within 1 business day."}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        {
                            if let Some(message) = (*error).as_ref() {
                                html! {
                                    <div class="banner error" role="alert" aria-live="assertive">
                                        <p>{message}</p>
                                        {
                                            if let Some(href) = wa_href.clone() {
                                                html! {
                                                    <p>
                                                        <a href={href} target="_blank" rel="noreferrer">
                                                            {"Send via WhatsApp instead"}
                                                        </a>
                                                    </p>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        {
                            if *show_summary && !step_error_list.is_empty() {
                                html! {
                                    <div class="banner error" role="alert" aria-live="assertive">
                                        <p>
                                            <strong>
                                                {format!(
                                                    "We found {} {} to review",
                                                    step_error_list.len(),
                                                    if step_error_list.len() == 1 { "issue" } else { "issues" }
                                                )}
                                            </strong>
                                        </p>
                                        <ul>
                                            {
                                                step_error_list.iter().map(|item| {
                                                    let dom_id = item.id.dom_id();
                                                    html! {
                                                        <li>
                                                            <span><strong>{item.label}{": "}</strong>{item.message.clone()}</span>
                                                            <button type="button" class="goto-button"
                                                                onclick={Callback::from(move |_: MouseEvent| focus_field(dom_id))}>
                                                                {"Go to"}
                                                            </button>
                                                        </li>
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <form id="casting-form" onsubmit={on_submit} onkeydown={on_keydown}>
                            <div class="step-meta">
                                <div>{format!("Step {} of {}", wizard.step + 1, TOTAL_STEPS)}</div>
                                <div class="step-dots">
                                    {
                                        (0..TOTAL_STEPS).map(|i| html! {
                                            <span class={classes!("step-dot", (i <= wizard.step).then_some("filled"))}></span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>

                            <ol class="stepper">
                                {
                                    STEP_LABELS.iter().enumerate().map(|(i, label)| {
                                        let active = i == wizard.step;
                                        let done = i < wizard.step;
                                        let reachable = wizard.reachable(i);
                                        let onclick = {
                                            let wizard = wizard.clone();
                                            let just_saved = just_saved.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                let mut next = (*wizard).clone();
                                                next.jump_to(i);
                                                wizard.set(next);
                                                just_saved.set(false);
                                            })
                                        };
                                        html! {
                                            <li>
                                                <button type="button"
                                                    class={classes!(
                                                        active.then_some("active"),
                                                        (done && !active).then_some("done")
                                                    )}
                                                    disabled={!reachable}
                                                    aria-current={if active { "step" } else { "false" }}
                                                    onclick={onclick}>
                                                    {format!("{} {}", i + 1, label)}
                                                </button>
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ol>

                            { step_body }

                            <div class="wizard-actions">
                                <div>
                                    <button type="button" class="secondary-button"
                                        disabled={wizard.submitted || wizard.step == 0}
                                        onclick={let go_back = go_back.clone(); Callback::from(move |_: MouseEvent| go_back.emit(()))}>
                                        {"Back"}
                                    </button>
                                    {" "}
                                    <button type="button" class="secondary-button"
                                        disabled={wizard.submitted}
                                        onclick={on_save_exit}>
                                        {"Save & Exit"}
                                    </button>
                                </div>
                                {
                                    if !wizard.is_last() {
                                        html! {
                                            <button type="button" class="cta"
                                                disabled={!steps::can_proceed(&form, wizard.step)}
                                                onclick={let go_next = go_next.clone(); Callback::from(move |_: MouseEvent| go_next.emit(()))}>
                                                {format!("Next · {}", STEP_LABELS[wizard.step + 1])}
                                            </button>
                                        }
                                    } else {
                                        html! {
                                            <button type="submit" class="cta"
                                                disabled={!steps::is_valid(&form) || *submitting}>
                                                { if *submitting { "Submitting…" } else { "Submit application" } }
                                            </button>
                                        }
                                    }
                                }
                            </div>

                            {
                                if *just_saved {
                                    html! {
                                        <div class="banner success" role="status" aria-live="polite">
                                            {"Progress saved locally. You can close this tab and continue later on this device."}
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </form>
                    </div>
                </div>

                <div class="footer-note">
                    <p>{"Shortlisted talent will receive a call sheet with styling, MUA/H schedule, location, and payment terms. Chaperones are welcome."}</p>
                </div>
            </section>

            {
                if wizard.submitted {
                    html! {
                        <div class="overlay" role="dialog" aria-modal="true">
                            <div class="modal">
                                <h3>{"Application submitted"}</h3>
                                <p>{"We'll review and get back within 1 business day."}</p>
                                <div class="modal-actions">
                                    {
                                        if let Some(href) = wa_href.clone() {
                                            html! {
                                                <a class="cta-ghost" href={href} target="_blank" rel="noreferrer">
                                                    {"Share more on WhatsApp"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <button type="button" class="cta"
                                        onclick={let wizard = wizard.clone(); Callback::from(move |_: MouseEvent| {
                                            wizard.set(Wizard::default());
                                        })}>
                                        {"Close"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
