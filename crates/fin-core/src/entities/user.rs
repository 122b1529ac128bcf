use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IncomeKind;
use crate::money::MoneyValue;

/// Account profile captured at sign-up: who the user is and their baseline
/// income per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub salary: MoneyValue,
    #[serde(default)]
    pub investment: MoneyValue,
    #[serde(default)]
    pub business: MoneyValue,
}

impl UserProfile {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn income(&self, kind: IncomeKind) -> &MoneyValue {
        match kind {
            IncomeKind::Salary => &self.salary,
            IncomeKind::Investment => &self.investment,
            IncomeKind::Business => &self.business,
        }
    }

    pub fn income_mut(&mut self, kind: IncomeKind) -> &mut MoneyValue {
        match kind {
            IncomeKind::Salary => &mut self.salary,
            IncomeKind::Investment => &mut self.investment,
            IncomeKind::Business => &mut self.business,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_currency;

    #[test]
    fn new_profile_has_empty_income() {
        let profile = UserProfile::new("ana", "ana@example.com");
        for kind in IncomeKind::ALL {
            assert!(profile.income(kind).is_empty());
        }
    }

    #[test]
    fn income_mut_targets_the_right_field() {
        let mut profile = UserProfile::new("ana", "ana@example.com");
        *profile.income_mut(IncomeKind::Business) = format_currency(900.0, "").expect("money");
        assert_eq!(profile.business.display, "$900");
        assert!(profile.salary.is_empty());
    }
}
