use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ignite_core::forms::{
    cap_message, catalog, on_completion, on_submit, toggle_selection, FieldKind, FieldSpec,
    FormEvent, FormPhase, MarkerTarget, Notice, NoticeKind, NoticeSlot, SubmitOutcome,
};
use ignite_core::{FormKind, FormValues};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notice::NoticeView;
use crate::forms::submit;

/// Field values of one form. Edits arrive as actions so that events fired
/// between renders apply to the latest values rather than a stale copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldAction {
    Text(&'static str, String),
    Checked(&'static str, bool),
    Toggle {
        field: &'static FieldSpec,
        option: &'static str,
        checked: bool,
    },
    Reset,
}

impl Reducible for FormState {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: FieldAction) -> Rc<Self> {
        let mut values = self.values.clone();
        match action {
            FieldAction::Text(name, value) => values.set_text(name, value),
            FieldAction::Checked(name, checked) => values.set_checked(name, checked),
            FieldAction::Toggle {
                field,
                option,
                checked,
            } => match toggle_selection(field, values.list(field.name), option, checked) {
                Ok(selection) => values.set_list(field.name, selection),
                // refused past the cap; the callback already reverted the box
                Err(_) => return self,
            },
            FieldAction::Reset => values = FormValues::new(),
        }
        Rc::new(FormState { values })
    }
}

fn advance(phase: &RefCell<FormPhase>, event: FormEvent) -> FormPhase {
    let next = phase.borrow().next(event);
    *phase.borrow_mut() = next;
    next
}

/// Everything needed to show this form's notice and schedule its dismissal.
#[derive(Clone)]
struct NoticeHandles {
    slot: Rc<RefCell<NoticeSlot>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    phase: Rc<RefCell<FormPhase>>,
    shown: UseStateHandle<Option<Notice>>,
    duration_ms: u32,
}

impl NoticeHandles {
    fn show(&self, kind: NoticeKind, message: String) {
        let id = self.slot.borrow_mut().show(kind, message);
        self.shown.set(self.slot.borrow().current().cloned());

        let slot = self.slot.clone();
        let shown = self.shown.clone();
        let phase = self.phase.clone();
        // Dropping the previous Timeout cancels it.
        *self.timer.borrow_mut() = Some(Timeout::new(self.duration_ms, move || {
            if slot.borrow_mut().dismiss(id) {
                shown.set(None);
                advance(&phase, FormEvent::NoticeDismissed);
            }
        }));
    }
}

fn required_marker(field: &FieldSpec) -> bool {
    field.required || field.group.map(|rule| rule.min > 0).unwrap_or(false)
}

fn field_label(field: &FieldSpec, id: &str) -> Html {
    html! {
        <label for={id.to_string()} class="form-label">
            {field.label}
            if required_marker(field) {
                <span class="required">{" *"}</span>
            }
        </label>
    }
}

struct FieldCallbacks {
    on_text: Callback<(&'static str, String)>,
    on_check: Callback<(&'static str, bool)>,
    on_toggle: Callback<(&'static FieldSpec, &'static str, HtmlInputElement)>,
}

fn render_field(
    form: FormKind,
    field: &'static FieldSpec,
    values: &FormValues,
    marked: bool,
    callbacks: &FieldCallbacks,
) -> Html {
    let name = field.name;
    let id = format!("{}-{}", form.slug(), name);
    let target = field.marker_target();
    let input_class = classes!(
        "form-input",
        (marked && target == MarkerTarget::Input).then_some("input-error")
    );
    let group_class = classes!(
        "form-group",
        (marked && target == MarkerTarget::GroupContainer).then_some("group-error")
    );

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                _ => "text",
            };
            let oninput = {
                let on_text = callbacks.on_text.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_text.emit((name, input.value()));
                })
            };
            html! {
                <div class="form-field">
                    {field_label(field, &id)}
                    <input
                        id={id.clone()}
                        type={input_type}
                        name={field.input_name()}
                        class={input_class}
                        value={values.text(name).to_string()}
                        {oninput}
                    />
                </div>
            }
        }
        FieldKind::TextArea => {
            let oninput = {
                let on_text = callbacks.on_text.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_text.emit((name, input.value()));
                })
            };
            html! {
                <div class="form-field">
                    {field_label(field, &id)}
                    <textarea
                        id={id.clone()}
                        name={field.input_name()}
                        class={input_class}
                        rows="4"
                        value={values.text(name).to_string()}
                        {oninput}
                    />
                </div>
            }
        }
        FieldKind::Select(choices) => {
            let onchange = {
                let on_text = callbacks.on_text.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_text.emit((name, select.value()));
                })
            };
            let current = values.text(name);
            html! {
                <div class="form-field">
                    {field_label(field, &id)}
                    <select id={id.clone()} name={field.input_name()} class={input_class} {onchange}>
                        <option value="" selected={current.is_empty()}>{"Select an option"}</option>
                        { for choices.iter().map(|choice| html! {
                            <option value={choice.value} selected={current == choice.value}>{choice.label}</option>
                        }) }
                    </select>
                </div>
            }
        }
        FieldKind::Radio(choices) => {
            let current = values.text(name);
            html! {
                <div class={group_class} role="radiogroup" aria-labelledby={id.clone()}>
                    <span id={id.clone()} class="form-label">
                        {field.label}
                        if required_marker(field) {
                            <span class="required">{" *"}</span>
                        }
                    </span>
                    { for choices.iter().map(|choice| {
                        let on_text = callbacks.on_text.clone();
                        let value = choice.value;
                        let onchange =
                            Callback::from(move |_: Event| on_text.emit((name, value.to_string())));
                        html! {
                            <label class="choice">
                                <input
                                    type="radio"
                                    name={field.input_name()}
                                    value={choice.value}
                                    checked={current == choice.value}
                                    {onchange}
                                />
                                {choice.label}
                            </label>
                        }
                    }) }
                </div>
            }
        }
        FieldKind::CheckboxGroup(choices) => {
            let selected = values.list(name);
            html! {
                <div class={group_class} aria-labelledby={id.clone()}>
                    <span id={id.clone()} class="form-label">
                        {field.label}
                        if let Some(rule) = field.group {
                            <span class="hint">{format!(" (choose up to {})", rule.max)}</span>
                        }
                    </span>
                    { for choices.iter().map(|choice| {
                        let on_toggle = callbacks.on_toggle.clone();
                        let value = choice.value;
                        let onchange = Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_toggle.emit((field, value, input));
                        });
                        html! {
                            <label class="choice">
                                <input
                                    type="checkbox"
                                    name={field.input_name()}
                                    value={choice.value}
                                    checked={selected.iter().any(|item| item == choice.value)}
                                    {onchange}
                                />
                                {choice.label}
                            </label>
                        }
                    }) }
                </div>
            }
        }
        FieldKind::Checkbox => {
            let onchange = {
                let on_check = callbacks.on_check.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_check.emit((name, input.checked()));
                })
            };
            html! {
                <div class="form-field form-consent">
                    <label class="choice" for={id.clone()}>
                        <input
                            id={id.clone()}
                            type="checkbox"
                            name={field.input_name()}
                            class={input_class}
                            checked={values.is_checked(name)}
                            {onchange}
                        />
                        {field.label}
                    </label>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FormViewProps {
    pub kind: FormKind,
}

/// Renders one of the site forms from its schema and runs the
/// validate / submit / notice cycle.
#[function_component]
pub fn FormView(props: &FormViewProps) -> Html {
    let kind = props.kind;
    let schema = catalog::schema_for(kind);

    let form_ref = use_node_ref();
    let form = use_reducer(FormState::default);
    let marked = use_state(Vec::<String>::new);
    let busy = use_state(|| false);
    let shown = use_state(|| None::<Notice>);
    let slot = use_mut_ref(NoticeSlot::new);
    let timer = use_mut_ref(|| None::<Timeout>);
    let phase = use_mut_ref(FormPhase::default);

    let notices = NoticeHandles {
        slot,
        timer,
        phase: phase.clone(),
        shown: shown.clone(),
        duration_ms: schema.notice_duration_ms,
    };

    let on_text = {
        let dispatcher = form.dispatcher();
        Callback::from(move |(name, value): (&'static str, String)| {
            dispatcher.dispatch(FieldAction::Text(name, value));
        })
    };

    let on_check = {
        let dispatcher = form.dispatcher();
        Callback::from(move |(name, checked): (&'static str, bool)| {
            dispatcher.dispatch(FieldAction::Checked(name, checked));
        })
    };

    let on_toggle = {
        let form = form.clone();
        let notices = notices.clone();
        Callback::from(
            move |(field, option, input): (&'static FieldSpec, &'static str, HtmlInputElement)| {
                let checked = input.checked();
                let current = form.values.list(field.name);
                if let Err(e) = toggle_selection(field, current, option, checked) {
                    log::debug!("Refused selection on {}: {}", kind, e);
                    input.set_checked(false);
                    notices.show(NoticeKind::Error, cap_message(field));
                    return;
                }
                form.dispatch(FieldAction::Toggle {
                    field,
                    option,
                    checked,
                });
            },
        )
    };

    let onsubmit = {
        let form = form.clone();
        let marked = marked.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = *phase.borrow();
            let step = on_submit(current, schema, &form.values);
            *phase.borrow_mut() = step.phase;

            let payload = match step.outcome {
                SubmitOutcome::Ignored => {
                    log::debug!("Ignoring {} submit while one is in flight", kind);
                    return;
                }
                SubmitOutcome::Invalid {
                    marked: fields,
                    notice,
                } => {
                    marked.set(fields);
                    notices.show(NoticeKind::Error, notice);
                    return;
                }
                SubmitOutcome::Send { payload } => payload,
            };

            marked.set(Vec::new());
            busy.set(true);

            let form = form.clone();
            let marked = marked.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            let phase = phase.clone();
            let form_ref = form_ref.clone();
            spawn_local(async move {
                let result = submit::submit(kind, &payload).await;
                if let Err(e) = &result {
                    log::warn!("{} submission failed: {}", kind, e);
                }

                let current = *phase.borrow();
                let done = on_completion(current, schema, &result);
                *phase.borrow_mut() = done.phase;
                if done.reset {
                    form.dispatch(FieldAction::Reset);
                    if let Some(element) = form_ref.cast::<HtmlFormElement>() {
                        element.reset();
                    }
                }
                marked.set(done.marked);
                notices.show(done.notice_kind, done.notice);
                busy.set(false);
            });
        })
    };

    let callbacks = FieldCallbacks {
        on_text,
        on_check,
        on_toggle,
    };

    html! {
        <div class="form-wrapper">
            <NoticeView form={kind} notice={(*shown).clone()} />
            <form
                ref={form_ref}
                id={kind.form_id()}
                class="ignite-form"
                novalidate={true}
                {onsubmit}
            >
                <h3 class="form-title">{schema.title}</h3>
                { for schema.fields.iter().map(|field| {
                    let is_marked = marked.iter().any(|name| name == field.name);
                    render_field(kind, field, &form.values, is_marked, &callbacks)
                }) }
                <button type="submit" class="form-submit" disabled={*busy}>
                    { if *busy { "Submitting..." } else { schema.submit_label } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignite_core::forms::catalog::REGISTRATION;
    use pretty_assertions::assert_eq;

    fn categories() -> &'static FieldSpec {
        REGISTRATION.field("participantCategories").unwrap()
    }

    fn toggle(option: &'static str) -> FieldAction {
        FieldAction::Toggle {
            field: categories(),
            option,
            checked: true,
        }
    }

    #[test]
    fn test_back_to_back_edits_are_all_kept() {
        let state = Rc::new(FormState::default())
            .reduce(FieldAction::Text("fullName", "Kemi Alade".to_string()))
            .reduce(FieldAction::Text("email", "kemi@example.com".to_string()))
            .reduce(FieldAction::Checked("terms", true));

        assert_eq!(state.values.text("fullName"), "Kemi Alade");
        assert_eq!(state.values.text("email"), "kemi@example.com");
        assert!(state.values.is_checked("terms"));
    }

    #[test]
    fn test_toggles_accumulate_up_to_the_cap() {
        let state = Rc::new(FormState::default())
            .reduce(toggle("developer"))
            .reduce(toggle("designer"))
            .reduce(toggle("founder"));
        assert_eq!(
            state.values.list("participantCategories"),
            ["developer", "designer", "founder"].map(String::from)
        );

        let refused = Rc::clone(&state).reduce(toggle("student"));
        assert!(Rc::ptr_eq(&state, &refused));
    }

    #[test]
    fn test_reset_clears_everything() {
        let state = Rc::new(FormState::default())
            .reduce(FieldAction::Text("fullName", "Kemi".to_string()))
            .reduce(toggle("developer"))
            .reduce(FieldAction::Reset);
        assert_eq!(*state, FormState::default());
    }
}
