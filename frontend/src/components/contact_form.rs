use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::components::button::{Button, Size};
use crate::lead::{submit_lead, Field, FormSession, Frustration};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    // Shared with the submit task, which must see edits made while it waits.
    let session = use_mut_ref(FormSession::default);
    let redraw = use_force_update();

    let on_input = |field: Field| {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session.borrow_mut().edit(field, input.value());
            redraw.force_update();
        })
    };

    let on_select = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            session.borrow_mut().edit(Field::Frustration, select.value());
            redraw.force_update();
        })
    };

    let onsubmit = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let started = session.borrow_mut().begin();
            redraw.force_update();

            let Some((lead, ticket)) = started else {
                debug!("Contact form rejected: {:?}", session.borrow().errors.fields());
                return;
            };

            let session = session.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                submit_lead(&lead).await;
                info!("Lead submitted for {}", lead.business_name);
                session.borrow_mut().succeed();
                redraw.force_update();

                TimeoutFuture::new(config::SUCCESS_CLEAR_MS).await;
                if session.borrow_mut().clear_success(ticket) {
                    redraw.force_update();
                }
            });
        })
    };

    let current = session.borrow().clone();
    let form = &current.form;
    let errors = &current.errors;
    let state = current.state;

    let field_class = |field: Field| {
        classes!("form-input", errors.get(field).is_some().then_some("invalid"))
    };

    let error_text = |field: Field| match errors.message(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    };

    html! {
        <div class="contact-form-card">
            <style>
                {r#"
                .contact-form-card h2 { margin-bottom: 1.5rem; }
                .contact-form { max-width: 28rem; display: grid; gap: 1rem; }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #334155;
                    margin-bottom: 0.25rem;
                }
                .form-input {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .form-input:focus { outline: 2px solid #3b82f6; border-color: #3b82f6; }
                .form-input.invalid { border-color: #ef4444; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .field-error { margin-top: 0.25rem; font-size: 0.875rem; color: #dc2626; }
                .form-success {
                    margin-bottom: 1.5rem;
                    padding: 1rem;
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 0.5rem;
                    color: #166534;
                    font-weight: 600;
                }
                .form-submit { width: 100%; padding: 1rem 2rem; }
                .form-note { font-size: 0.75rem; color: #64748b; text-align: center; }
                .form-alt {
                    font-size: 0.875rem;
                    color: #475569;
                    text-align: center;
                    padding-top: 0.5rem;
                    border-top: 1px solid #e2e8f0;
                }
                @media (max-width: 480px) {
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h2 class="heading-sm">{"Get Your Free Quote"}</h2>

            if state.shows_success() {
                <div class="form-success" role="status">
                    {"✓ Success! We'll be in touch within 24 hours."}
                </div>
            }

            <form class="contact-form" {onsubmit} novalidate={true}>
                <div>
                    <label for={Field::BusinessName.id()}>{"Your Business Name"}</label>
                    <input
                        id={Field::BusinessName.id()}
                        type="text"
                        class={field_class(Field::BusinessName)}
                        placeholder="Joe's Coffee (Shoreditch)"
                        value={form.business_name.clone()}
                        oninput={on_input(Field::BusinessName)}
                    />
                    { error_text(Field::BusinessName) }
                </div>

                <div>
                    <label for={Field::Name.id()}>{"Your Name"}</label>
                    <input
                        id={Field::Name.id()}
                        type="text"
                        class={field_class(Field::Name)}
                        placeholder="Joe Smith"
                        value={form.name.clone()}
                        oninput={on_input(Field::Name)}
                    />
                    { error_text(Field::Name) }
                </div>

                <div class="form-row">
                    <div>
                        <label for={Field::Email.id()}>{"Email"}</label>
                        <input
                            id={Field::Email.id()}
                            type="email"
                            class={field_class(Field::Email)}
                            placeholder="joe@joescoffee.co.uk"
                            value={form.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        { error_text(Field::Email) }
                    </div>
                    <div>
                        <label for={Field::Phone.id()}>{"Phone"}</label>
                        <input
                            id={Field::Phone.id()}
                            type="tel"
                            class="form-input"
                            placeholder="020 7946 0123"
                            value={form.phone.clone()}
                            oninput={on_input(Field::Phone)}
                        />
                    </div>
                </div>

                <div>
                    <label for={Field::Frustration.id()}>
                        {"What's your biggest website frustration right now?"}
                    </label>
                    <select
                        id={Field::Frustration.id()}
                        class={field_class(Field::Frustration)}
                        onchange={on_select}
                    >
                        <option value="" selected={form.frustration.is_empty()}>{"Select one..."}</option>
                        { for Frustration::ALL.iter().map(|f| html! {
                            <option value={f.value()} selected={form.frustration == f.value()}>
                                {f.label()}
                            </option>
                        }) }
                    </select>
                    { error_text(Field::Frustration) }
                </div>

                <div>
                    <label for={Field::CurrentSite.id()}>{"Current site (or \"none yet\")"}</label>
                    <input
                        id={Field::CurrentSite.id()}
                        type="text"
                        class="form-input"
                        placeholder="www.joescoffee.co.uk or type 'none'"
                        value={form.current_site.clone()}
                        oninput={on_input(Field::CurrentSite)}
                    />
                </div>

                <Button
                    kind="submit"
                    size={Size::Lg}
                    class={classes!("form-submit")}
                    disabled={!state.can_submit()}
                >
                    {state.button_label()}
                </Button>

                <p class="form-note">{"✅ London businesses only | Fixed price | Reply within 2hrs"}</p>
                <p class="form-alt">
                    {"or email "}
                    <a href={config::mailto()}>{config::CONTACT_EMAIL}</a>
                </p>
            </form>
        </div>
    }
}
