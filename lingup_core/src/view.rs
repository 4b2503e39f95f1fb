//! Top-level page selection.

/// Which page the shell renders. Enrolling opens `Order`; a successful
/// confirmation moves to `Success`; both can go back to `Landing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Landing,
    Order,
    Success,
}
