use std::fmt;

/// Which template a week is bound to.
///
/// `Default` is never stored: writing it removes the week's association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    Default,
    Named(String),
}

impl TemplateChoice {
    pub fn from_association(name: Option<String>) -> Self {
        match name {
            Some(n) => TemplateChoice::Named(n),
            None => TemplateChoice::Default,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            TemplateChoice::Default => None,
            TemplateChoice::Named(n) => Some(n),
        }
    }
}

impl fmt::Display for TemplateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateChoice::Default => write!(f, "default"),
            TemplateChoice::Named(n) => write!(f, "{}", n),
        }
    }
}
