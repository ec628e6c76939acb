use ignite_core::forms::{Notice, NoticeKind};
use ignite_core::FormKind;
use yew::prelude::*;

/// Class that identifies a form's notice element.
pub fn notice_marker(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Volunteer => "form-message",
        FormKind::Sponsor => "sponsor-form-message",
        FormKind::Exhibitor => "exhibitor-form-message",
        FormKind::Registration => "registration-form-message",
    }
}

pub fn notice_classes(form: FormKind, kind: NoticeKind) -> String {
    let tone = match kind {
        NoticeKind::Success => "bg-green-100 text-green-800 border border-green-200",
        NoticeKind::Error => "bg-red-100 text-red-800 border border-red-200",
    };
    format!(
        "{} p-4 rounded-lg font-montserrat text-center mb-4 {}",
        notice_marker(form),
        tone
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeViewProps {
    pub form: FormKind,
    pub notice: Option<Notice>,
}

#[function_component]
pub fn NoticeView(props: &NoticeViewProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div class={notice_classes(props.form, notice.kind)} role="status" aria-live="polite">
                {notice.message.clone()}
            </div>
        },
        None => html! {},
    }
}
