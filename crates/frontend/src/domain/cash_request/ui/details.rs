use contracts::domain::cash_request::{urgency, CreateCashRequestDto};
use leptos::prelude::*;

use super::super::api;
use crate::routes::use_navigator;

/// ViewModel for the new cash request form
#[derive(Clone)]
pub struct CashRequestFormViewModel {
    pub form: RwSignal<CreateCashRequestDto>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<&'static str>>,
}

impl CashRequestFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Self::initial_form()),
            error: RwSignal::new(None),
            validation: RwSignal::new(None),
        }
    }

    fn initial_form() -> CreateCashRequestDto {
        CreateCashRequestDto {
            currency: "USD".to_string(),
            urgency: urgency::MEDIUM.to_string(),
            ..Default::default()
        }
    }

    fn validate_form(dto: &CreateCashRequestDto) -> Result<(), &'static str> {
        if dto.purpose.trim().is_empty() {
            return Err("Purpose is required");
        }
        if dto.amount <= 0.0 {
            return Err("Amount must be greater than zero");
        }
        if dto.currency.trim().is_empty() {
            return Err("Currency is required");
        }
        Ok(())
    }

    /// Submit the form; navigation happens only on success. Validation
    /// failures never reach the network.
    pub fn save_command(&self, on_saved: impl Fn() + Clone + 'static) -> impl Fn() + Clone {
        let this = self.clone();
        move || {
            let dto = this.form.get();
            if let Err(msg) = Self::validate_form(&dto) {
                this.validation.set(Some(msg));
                return;
            }
            this.validation.set(None);
            let this = this.clone();
            let on_saved = on_saved.clone();
            leptos::task::spawn_local(async move {
                match api::create(&dto).await {
                    Ok(_) => on_saved(),
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_form_seeds_currency_and_urgency() {
        let form = CashRequestFormViewModel::initial_form();
        assert_eq!(form.currency, "USD");
        assert_eq!(form.urgency, urgency::MEDIUM);
        assert!(form.purpose.is_empty());
    }

    #[test]
    fn test_validate_form_rejects_incomplete_input() {
        let mut form = CashRequestFormViewModel::initial_form();
        assert!(CashRequestFormViewModel::validate_form(&form).is_err());

        form.purpose = "Courier fees".to_string();
        assert!(CashRequestFormViewModel::validate_form(&form).is_err());

        form.amount = 120.0;
        assert!(CashRequestFormViewModel::validate_form(&form).is_ok());
    }
}

#[component]
pub fn CashRequestNewPage() -> impl IntoView {
    let vm = CashRequestFormViewModel::new();
    let nav = use_navigator();

    let save = vm.save_command(move || nav.navigate("/employee/cash-requests"));
    let form = vm.form;
    let error = vm.error;
    let validation = vm.validation;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New Cash Request"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || validation.get().map(|e| view! { <div class="field-error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="purpose">"Purpose"</label>
                    <input
                        type="text"
                        id="purpose"
                        prop:value=move || form.get().purpose
                        on:input=move |ev| {
                            form.update(|f| f.purpose = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="amount">"Amount"</label>
                    <input
                        type="number"
                        id="amount"
                        step="0.01"
                        prop:value=move || form.get().amount.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            form.update(|f| f.amount = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="currency">"Currency"</label>
                    <input
                        type="text"
                        id="currency"
                        prop:value=move || form.get().currency
                        on:input=move |ev| {
                            form.update(|f| f.currency = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="urgency">"Urgency"</label>
                    <select
                        id="urgency"
                        prop:value=move || form.get().urgency
                        on:change=move |ev| {
                            form.update(|f| f.urgency = event_target_value(&ev));
                        }
                    >
                        <option value=urgency::LOW>"Low"</option>
                        <option value=urgency::MEDIUM>"Medium"</option>
                        <option value=urgency::HIGH>"High"</option>
                        <option value=urgency::CRITICAL>"Critical"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="needed_by">"Needed by"</label>
                    <input
                        type="date"
                        id="needed_by"
                        prop:value=move || {
                            form.get().needed_by.map(|d| d.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.needed_by = v.parse().ok());
                        }
                    />
                </div>

                <div class="details-actions">
                    <button class="btn-primary" on:click=move |_| save()>
                        "Submit"
                    </button>
                    <button class="btn-secondary" on:click=move |_| nav.navigate("/employee/cash-requests")>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
