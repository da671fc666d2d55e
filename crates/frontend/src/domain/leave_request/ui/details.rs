use contracts::domain::leave_request::CreateLeaveRequestDto;
use leptos::prelude::*;

use super::super::api;
use crate::routes::use_navigator;

#[derive(Clone)]
pub struct LeaveRequestFormViewModel {
    pub form: RwSignal<CreateLeaveRequestDto>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<&'static str>>,
}

impl LeaveRequestFormViewModel {
    pub fn new() -> Self {
        let mut initial = CreateLeaveRequestDto::default();
        initial.leave_type = "annual".to_string();
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            validation: RwSignal::new(None),
        }
    }

    fn validate_form(dto: &CreateLeaveRequestDto) -> Result<(), &'static str> {
        let (Some(from), Some(to)) = (dto.from_date, dto.to_date) else {
            return Err("Both dates are required");
        };
        if to < from {
            return Err("End date must not be before start date");
        }
        Ok(())
    }

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

#[component]
pub fn LeaveRequestNewPage() -> impl IntoView {
    let vm = LeaveRequestFormViewModel::new();
    let nav = use_navigator();

    let save = vm.save_command(move || nav.navigate("/employee/leave-requests"));
    let form = vm.form;
    let error = vm.error;
    let validation = vm.validation;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New Leave Request"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || validation.get().map(|e| view! { <div class="field-error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="leave_type">"Type"</label>
                    <select
                        id="leave_type"
                        prop:value=move || form.get().leave_type
                        on:change=move |ev| {
                            form.update(|f| f.leave_type = event_target_value(&ev));
                        }
                    >
                        <option value="annual">"Annual"</option>
                        <option value="sick">"Sick"</option>
                        <option value="unpaid">"Unpaid"</option>
                        <option value="other">"Other"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="from_date">"From"</label>
                    <input
                        type="date"
                        id="from_date"
                        prop:value=move || {
                            form.get().from_date.map(|d| d.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.from_date = v.parse().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="to_date">"To"</label>
                    <input
                        type="date"
                        id="to_date"
                        prop:value=move || {
                            form.get().to_date.map(|d| d.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.to_date = v.parse().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="reason">"Reason"</label>
                    <textarea
                        id="reason"
                        prop:value=move || form.get().reason.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| {
                                f.reason = if v.trim().is_empty() { None } else { Some(v) };
                            });
                        }
                    ></textarea>
                </div>

                <div class="details-actions">
                    <button class="btn-primary" on:click=move |_| save()>
                        "Submit"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| nav.navigate("/employee/leave-requests")
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
