use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use crate::config;
use crate::quote::{can_submit, QuoteDraft, SubmitOutcome, REQUESTED_SERVICES};
use crate::Route;

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let draft = use_state(QuoteDraft::default);
    let submitted = use_state(|| false);
    let submitting = use_state(|| false);
    let status = use_state(String::new);

    // One callback per scalar field, all built the same way.
    let edit_field = {
        let draft = draft.clone();
        move |apply: fn(&mut QuoteDraft, String)| {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            })
        }
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.notes = area.value();
            draft.set(next);
        })
    };

    let on_hose_access = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.hose_access = input.checked();
            draft.set(next);
        })
    };

    let toggle_service = {
        let draft = draft.clone();
        Callback::from(move |service: &'static str| {
            let mut next = (*draft).clone();
            next.toggle_service(service);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitted = submitted.clone();
        let submitting = submitting.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Gate on the in-flight flag so a double click cannot issue
            // two overlapping requests.
            if !can_submit(&draft, *submitting) {
                return;
            }
            submitting.set(true);

            let payload = (*draft).clone();
            let draft = draft.clone();
            let submitted = submitted.clone();
            let submitting = submitting.clone();
            let status = status.clone();

            spawn_local(async move {
                let form_data = FormData::new().unwrap();
                for (key, value) in payload.fields() {
                    form_data.append_with_str(key, &value).unwrap();
                }

                log!("Submitting quote request");
                let outcome = match Request::post(config::get_form_endpoint())
                    .header("Accept", "application/json")
                    .body(form_data)
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => SubmitOutcome::Success,
                    Ok(response) => {
                        log!("Quote submission rejected with status:", response.status());
                        let body = response.text().await.ok();
                        SubmitOutcome::from_response(false, body.as_deref())
                    }
                    Err(e) => {
                        log!("Quote submission failed:", e.to_string());
                        SubmitOutcome::TransportFailure
                    }
                };

                status.set(outcome.message());
                if outcome == SubmitOutcome::Success {
                    draft.set(QuoteDraft::default());
                    submitted.set(true);
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="quote-page">
            <div class="section-heading">
                <h2>{"Request a Free Quote"}</h2>
                <p>{"Let us know about your aircraft and what services you're interested in."}</p>
            </div>
            {
                if *submitted {
                    html! {
                        <div class="thank-you-panel">
                            <h2>{"Thank You!"}</h2>
                            <p>{(*status).clone()}</p>
                        </div>
                    }
                } else {
                    html! {
                        <form onsubmit={onsubmit} class="quote-form">
                            <div class="field-grid">
                                <div class="form-field">
                                    <label>{"Email"}</label>
                                    <input
                                        type="email"
                                        value={draft.email.clone()}
                                        onchange={edit_field(|d, v| d.email = v)}
                                        required={true}
                                    />
                                </div>
                                <div class="form-field">
                                    <label>{"Aircraft Type"}</label>
                                    <input
                                        type="text"
                                        value={draft.aircraft_type.clone()}
                                        onchange={edit_field(|d, v| d.aircraft_type = v)}
                                        required={true}
                                    />
                                </div>
                                <div class="form-field">
                                    <label>{"Tail Number (N#)"}</label>
                                    <input
                                        type="text"
                                        value={draft.tail_number.clone()}
                                        onchange={edit_field(|d, v| d.tail_number = v)}
                                        required={true}
                                    />
                                </div>
                                <div class="form-field">
                                    <label>{"Location (Airport/FBO)"}</label>
                                    <input
                                        type="text"
                                        value={draft.location.clone()}
                                        onchange={edit_field(|d, v| d.location = v)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label>{"Preferred Date/Time"}</label>
                                    <input
                                        type="text"
                                        value={draft.preferred_date.clone()}
                                        onchange={edit_field(|d, v| d.preferred_date = v)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label>{"Phone Number"}</label>
                                    <input
                                        type="tel"
                                        value={draft.phone_number.clone()}
                                        onchange={edit_field(|d, v| d.phone_number = v)}
                                    />
                                </div>
                            </div>

                            <div class="form-field">
                                <label>{"Requested Services"}</label>
                                <div class="service-checkboxes">
                                    { for REQUESTED_SERVICES.iter().copied().map(|service| {
                                        let toggle = {
                                            let toggle_service = toggle_service.clone();
                                            Callback::from(move |_: Event| toggle_service.emit(service))
                                        };
                                        html! {
                                            <label class="checkbox-label">
                                                <input
                                                    type="checkbox"
                                                    checked={draft.has_service(service)}
                                                    onchange={toggle}
                                                />
                                                {service}
                                            </label>
                                        }
                                    }) }
                                </div>
                            </div>

                            <div class="form-field">
                                <label>{"Additional Notes"}</label>
                                <textarea
                                    rows="4"
                                    value={draft.notes.clone()}
                                    onchange={on_notes}
                                    placeholder="Any special requests or info you'd like to share"
                                />
                            </div>

                            <div class="form-field">
                                <label>{"Is there hose access?"}</label>
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        checked={draft.hose_access}
                                        onchange={on_hose_access}
                                    />
                                    <span>{ if draft.hose_access { "Yes" } else { "No" } }</span>
                                </label>
                            </div>

                            <div class="form-actions">
                                <button type="submit" class="cta-button" disabled={*submitting}>
                                    { if *submitting { "Submitting..." } else { "Submit Quote Request" } }
                                </button>
                            </div>
                            <p class="status-message">{(*status).clone()}</p>
                        </form>
                    }
                }
            }
            <div class="pricing-actions">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </section>
    }
}
