// Screen routing surface. A plain string-keyed enum; no URL routing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Login,
    Register,
    AdminLogin,
    ForgotPassword,
    AdminDashboard,
    Home,
    Invest,
    Profile,
    ChangePassword,
    Deposit,
    Withdraw,
    MyInformation,
    BankAccount,
    BillDetails,
    FundPassword,
    MyOrders,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Register => "register",
            View::AdminLogin => "admin-login",
            View::ForgotPassword => "forgot-password",
            View::AdminDashboard => "admin-dashboard",
            View::Home => "home",
            View::Invest => "invest",
            View::Profile => "profile",
            View::ChangePassword => "change-password",
            View::Deposit => "deposit",
            View::Withdraw => "withdraw",
            View::MyInformation => "my-information",
            View::BankAccount => "bank-account",
            View::BillDetails => "bill-details",
            View::FundPassword => "fund-password",
            View::MyOrders => "my-orders",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_as_str() {
        for view in [
            View::Login,
            View::AdminLogin,
            View::ForgotPassword,
            View::AdminDashboard,
            View::MyInformation,
            View::BillDetails,
        ] {
            let v = serde_json::to_value(view).unwrap();
            assert_eq!(v, view.as_str());
        }
    }

    #[test]
    fn test_deserialize_kebab() {
        let view: View = serde_json::from_value(serde_json::json!("fund-password")).unwrap();
        assert_eq!(view, View::FundPassword);
    }
}
