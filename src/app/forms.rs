//! Form state for text-entry screens and overlays.
//!
//! Each [`FormKind`] has a fixed, ordered list of fields. Forms only hold
//! text; validation and submission live with the handlers that consume them.

use crate::domain::models::JobId;

/// Identifies a form field independently of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Email,
    Name,
    Password,
    ConfirmPassword,
    Title,
    Start,
    Description,
    Image,
    Comment,
}

impl FieldKey {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
            Self::Title => "Title",
            Self::Start => "Start date (dd/mm/yyyy)",
            Self::Description => "Description",
            Self::Image => "Image file (png/jpg)",
            Self::Comment => "Comment",
        }
    }

    /// Secret fields are masked when rendered.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// The forms the client knows how to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    UpdateProfile,
    NewJob,
    UpdateJob { job_id: JobId },
    Comment { job_id: JobId },
    Watch,
}

impl FormKind {
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldKey] {
        use FieldKey::{Comment, ConfirmPassword, Description, Email, Image, Name, Password, Start, Title};
        match self {
            Self::Login => &[Email, Password],
            Self::Register => &[Email, Name, Password, ConfirmPassword],
            Self::UpdateProfile => &[Name, Email, Password, Image],
            Self::NewJob | Self::UpdateJob { .. } => &[Title, Start, Description, Image],
            Self::Comment { .. } => &[Comment],
            Self::Watch => &[Email],
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::UpdateProfile => "Update profile",
            Self::NewJob => "Post a new job",
            Self::UpdateJob { .. } => "Update job",
            Self::Comment { .. } => "Add a comment",
            Self::Watch => "Watch a user by email",
        }
    }

    /// Overlay forms sit on top of the dashboard instead of owning a screen.
    #[must_use]
    pub const fn is_overlay(&self) -> bool {
        matches!(self, Self::Comment { .. } | Self::Watch)
    }
}

/// One editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: FieldKey,
    pub value: String,
}

/// An editable form with a focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    /// Creates a blank form of the given kind with focus on the first field.
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|&key| Field {
                key,
                value: String::new(),
            })
            .collect();
        Self {
            kind,
            fields,
            focus: 0,
        }
    }

    /// Creates a form with some fields prefilled.
    #[must_use]
    pub fn with_values(kind: FormKind, values: &[(FieldKey, String)]) -> Self {
        let mut form = Self::new(kind);
        for (key, value) in values {
            form.set(*key, value.clone());
        }
        form
    }

    /// Value of a field, empty if the form has no such field.
    ///
    /// Surrounding whitespace is trimmed, except in secret fields, which are
    /// returned exactly as typed.
    #[must_use]
    pub fn value(&self, key: FieldKey) -> &str {
        self.fields.iter().find(|f| f.key == key).map_or("", |f| {
            if f.key.is_secret() {
                f.value.as_str()
            } else {
                f.value.trim()
            }
        })
    }

    /// Non-empty value of a field, see [`Form::value`].
    #[must_use]
    pub fn non_empty(&self, key: FieldKey) -> Option<String> {
        let value = self.value(key);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value;
        }
    }

    #[must_use]
    pub fn focused_key(&self) -> Option<FieldKey> {
        self.fields.get(self.focus).map(|f| f.key)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Moves focus to the next field, wrapping to the first.
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping to the last.
    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.focus == 0 {
            self.focus = self.fields.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Whether any of the given fields is blank.
    #[must_use]
    pub fn any_blank(&self, keys: &[FieldKey]) -> bool {
        keys.iter().any(|&k| self.value(k).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = Form::new(FormKind::Login);
        for c in "a@b".chars() {
            form.insert_char(c);
        }
        form.next_field();
        form.insert_char('x');
        form.insert_char('y');
        form.backspace();

        assert_eq!(form.value(FieldKey::Email), "a@b");
        assert_eq!(form.value(FieldKey::Password), "x");
        assert_eq!(form.focused_key(), Some(FieldKey::Password));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = Form::new(FormKind::Register);
        form.prev_field();
        assert_eq!(form.focused_key(), Some(FieldKey::ConfirmPassword));
        form.next_field();
        assert_eq!(form.focused_key(), Some(FieldKey::Email));
    }

    #[test]
    fn prefill_and_blank_detection() {
        let form = Form::with_values(
            FormKind::NewJob,
            &[(FieldKey::Title, "  Engineer ".into()), (FieldKey::Comment, "ignored".into())],
        );
        assert_eq!(form.value(FieldKey::Title), "Engineer");
        assert_eq!(form.value(FieldKey::Comment), "");
        assert!(form.any_blank(&[FieldKey::Title, FieldKey::Start]));
        assert!(!form.any_blank(&[FieldKey::Title]));
        assert_eq!(form.non_empty(FieldKey::Start), None);
    }

    #[test]
    fn passwords_keep_surrounding_spaces() {
        let form = Form::with_values(
            FormKind::Register,
            &[(FieldKey::Email, " a@b ".into()), (FieldKey::Password, " pw ".into())],
        );
        assert_eq!(form.value(FieldKey::Email), "a@b");
        assert_eq!(form.value(FieldKey::Password), " pw ");
        assert_eq!(form.non_empty(FieldKey::Password).as_deref(), Some(" pw "));
    }
}
