use crate::model::SymbolTable;
use crate::policy::Policy;

/// Outcome for a single imported function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Forbidden,
}

/// Which tier of the precedence scheme decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Library is banned (globally or by tag); only an explicit authorization saves it.
    BannedLibrary,
    /// Library is authorized (globally or by tag); only an explicit ban rejects it.
    AuthorizedLibrary,
    /// Neither policy claims the library; the function must be authorized by name.
    DefaultDeny,
}

/// The authorized/banned pair evaluated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySet {
    pub authorized: Policy,
    pub banned: Policy,
}

impl PolicySet {
    pub fn new(authorized: Policy, banned: Policy) -> Self {
        Self { authorized, banned }
    }

    /// Decide whether `function` imported from `library` is admissible.
    ///
    /// Tiers are checked in order and the first one that claims the library
    /// decides:
    /// 1. banned wildcard or banned library: forbidden unless authorized by name
    /// 2. authorized wildcard or authorized library: allowed unless banned by name
    /// 3. otherwise: allowed only if authorized by name and not banned by name
    pub fn verdict(&self, library: &str, function: &str) -> (Verdict, Rule) {
        if self.banned.covers_library(library) {
            let verdict = if self.authorized.names_function(function) {
                Verdict::Allowed
            } else {
                Verdict::Forbidden
            };
            return (verdict, Rule::BannedLibrary);
        }

        if self.authorized.covers_library(library) {
            let verdict = if self.banned.names_function(function) {
                Verdict::Forbidden
            } else {
                Verdict::Allowed
            };
            return (verdict, Rule::AuthorizedLibrary);
        }

        let verdict = if self.banned.names_function(function)
            || !self.authorized.names_function(function)
        {
            Verdict::Forbidden
        } else {
            Verdict::Allowed
        };
        (verdict, Rule::DefaultDeny)
    }

    /// Evaluate every imported function in `symbols`, in table order.
    pub fn evaluate(&self, symbols: &SymbolTable) -> Evaluation {
        let forbidden = symbols
            .pairs()
            .filter(|(library, function)| self.verdict(library, function).0 == Verdict::Forbidden)
            .map(|(_, function)| function.to_string())
            .collect();
        Evaluation { forbidden }
    }
}

/// Forbidden functions in evaluation order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub forbidden: Vec<String>,
}

impl Evaluation {
    pub fn is_clean(&self) -> bool {
        self.forbidden.is_empty()
    }
}
