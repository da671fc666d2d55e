use contracts::domain::it_ticket::{priority, CreateItTicketDto};
use leptos::prelude::*;

use super::super::api;
use crate::routes::use_navigator;

#[derive(Clone)]
pub struct ItTicketFormViewModel {
    pub form: RwSignal<CreateItTicketDto>,
    pub error: RwSignal<Option<String>>,
    pub validation: RwSignal<Option<&'static str>>,
}

impl ItTicketFormViewModel {
    pub fn new() -> Self {
        let mut initial = CreateItTicketDto::default();
        initial.priority = priority::MEDIUM.to_string();
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            validation: RwSignal::new(None),
        }
    }

    fn validate_form(dto: &CreateItTicketDto) -> Result<(), &'static str> {
        if dto.subject.trim().is_empty() {
            return Err("Subject is required");
        }
        if dto.description.trim().is_empty() {
            return Err("Description is required");
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
pub fn ItTicketNewPage() -> impl IntoView {
    let vm = ItTicketFormViewModel::new();
    let nav = use_navigator();

    let save = vm.save_command(move || nav.navigate("/employee/it-tickets"));
    let form = vm.form;
    let error = vm.error;
    let validation = vm.validation;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New IT Ticket"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || validation.get().map(|e| view! { <div class="field-error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="subject">"Subject"</label>
                    <input
                        type="text"
                        id="subject"
                        prop:value=move || form.get().subject
                        on:input=move |ev| {
                            form.update(|f| f.subject = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <input
                        type="text"
                        id="category"
                        prop:value=move || form.get().category.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| {
                                f.category = if v.trim().is_empty() { None } else { Some(v) };
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="priority">"Priority"</label>
                    <select
                        id="priority"
                        prop:value=move || form.get().priority
                        on:change=move |ev| {
                            form.update(|f| f.priority = event_target_value(&ev));
                        }
                    >
                        <option value=priority::LOW>"Low"</option>
                        <option value=priority::MEDIUM>"Medium"</option>
                        <option value=priority::HIGH>"High"</option>
                        <option value=priority::URGENT>"Urgent"</option>
                    </select>
                </div>

                <div class="details-actions">
                    <button class="btn-primary" on:click=move |_| save()>
                        "Submit"
                    </button>
                    <button class="btn-secondary" on:click=move |_| nav.navigate("/employee/it-tickets")>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
