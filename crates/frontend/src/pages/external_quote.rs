//! Public quote submission screen for third-party suppliers.
//!
//! Reached via `/external-quote/:token` without any session; the token alone
//! scopes what the backend returns and accepts.

use contracts::domain::rfq::{ExternalQuoteRequestDto, SubmitQuoteDto};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::api_url;
use crate::shared::date_utils::format_date;

async fn fetch_request(token: &str) -> Result<ExternalQuoteRequestDto, String> {
    let response = Request::get(&api_url(&format!("/api/external-quote/{}", token)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Quote request not found: {}", response.status()));
    }

    response
        .json::<ExternalQuoteRequestDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn submit_quote(token: &str, dto: &SubmitQuoteDto) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/external-quote/{}", token)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Submit failed: {}", response.status()));
    }

    Ok(())
}

#[component]
pub fn ExternalQuotePage(token: String) -> impl IntoView {
    let request = RwSignal::new(Option::<ExternalQuoteRequestDto>::None);
    let error = RwSignal::new(Option::<String>::None);
    let form = RwSignal::new(SubmitQuoteDto::default());
    let submitted = RwSignal::new(false);
    let validation = RwSignal::new(Option::<&'static str>::None);

    {
        let token = token.clone();
        spawn_local(async move {
            match fetch_request(&token).await {
                Ok(data) => request.set(Some(data)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    fn validate(dto: &SubmitQuoteDto) -> Result<(), &'static str> {
        if dto.total_price <= 0.0 {
            return Err("Total price must be greater than zero");
        }
        if dto.currency.trim().is_empty() {
            return Err("Currency is required");
        }
        Ok(())
    }

    let submit_token = token.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();
        if let Err(msg) = validate(&dto) {
            validation.set(Some(msg));
            return;
        }
        validation.set(None);
        let token = submit_token.clone();
        spawn_local(async move {
            match submit_quote(&token, &dto).await {
                Ok(()) => submitted.set(true),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="external-quote">
            <h2>"Quote Submission"</h2>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || submitted.get()>
                <div class="alert alert--success">"Quote submitted. Thank you."</div>
            </Show>

            {move || {
                request
                    .get()
                    .filter(|_| !submitted.get())
                    .map(|data| {
                        view! {
                            <div class="quote-request">
                                <p>
                                    <strong>{data.rfq_number.clone()}</strong>
                                    " — "
                                    {data.title.clone()}
                                </p>
                                <p>{data.description.clone()}</p>
                                <p>
                                    "Deadline: "
                                    {data
                                        .quote_deadline
                                        .map(|d| format_date(&d.to_string()))
                                        .unwrap_or_else(|| "—".to_string())}
                                </p>
                            </div>
                            <form on:submit=on_submit.clone()>
                                <Show when=move || validation.get().is_some()>
                                    <div class="field-error">
                                        {move || validation.get().unwrap_or_default()}
                                    </div>
                                </Show>
                                <div class="form-group">
                                    <label for="total_price">"Total price"</label>
                                    <input
                                        type="number"
                                        id="total_price"
                                        step="0.01"
                                        prop:value=move || form.get().total_price.to_string()
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                            form.update(|f| f.total_price = v);
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="currency">"Currency"</label>
                                    <input
                                        type="text"
                                        id="currency"
                                        prop:value=move || form.get().currency.clone()
                                        on:input=move |ev| {
                                            form.update(|f| f.currency = event_target_value(&ev));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="lead_time">"Lead time (days)"</label>
                                    <input
                                        type="number"
                                        id="lead_time"
                                        prop:value=move || form.get().lead_time_days.to_string()
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev).parse().unwrap_or(0);
                                            form.update(|f| f.lead_time_days = v);
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="notes">"Notes"</label>
                                    <textarea
                                        id="notes"
                                        prop:value=move || {
                                            form.get().notes.clone().unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            form.update(|f| {
                                                f.notes = if v.trim().is_empty() { None } else { Some(v) };
                                            });
                                        }
                                    ></textarea>
                                </div>
                                <button type="submit" class="btn-primary">
                                    "Submit quote"
                                </button>
                            </form>
                        }
                    })
            }}
        </div>
    }
}
