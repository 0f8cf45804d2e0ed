// src/form/toast.rs

pub const LOADING_MESSAGE: &str = "Creating your account...";
pub const SUCCESS_MESSAGE: &str = "Done!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Loading => "toast-loading",
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub visible: bool,
}

/// Transient user feedback around a submission.
pub trait Notifier {
    fn loading(&mut self, message: &str) -> ToastId;
    /// Replace the toast `id` with a success message.
    fn success(&mut self, id: ToastId, message: &str);
    /// Replace the toast `id` with an error message.
    fn error(&mut self, id: ToastId, message: &str);
    fn dismiss_all(&mut self);
}

/// Keeps toasts in memory so a page can render the visible ones.
#[derive(Debug, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| t.visible)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn replace(&mut self, id: ToastId, kind: ToastKind, message: &str) {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message.to_string();
            }
            None => tracing::warn!(?id, "replacing unknown toast"),
        }
    }
}

impl Notifier for Toaster {
    fn loading(&mut self, message: &str) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, text = message, "toast loading");
        self.toasts.push(Toast {
            id,
            kind: ToastKind::Loading,
            message: message.to_string(),
            visible: true,
        });
        id
    }

    fn success(&mut self, id: ToastId, message: &str) {
        tracing::debug!(?id, text = message, "toast success");
        self.replace(id, ToastKind::Success, message);
    }

    fn error(&mut self, id: ToastId, message: &str) {
        tracing::debug!(?id, text = message, "toast error");
        self.replace(id, ToastKind::Error, message);
    }

    fn dismiss_all(&mut self) {
        for toast in &mut self.toasts {
            toast.visible = false;
        }
    }
}
