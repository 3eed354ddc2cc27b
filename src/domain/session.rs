use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::process::ProcessSelection;

/// Simulated access level. Picking one is a switch, not a credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Maintenance,
    Operator,
}

impl Role {
    pub fn visible_tabs(&self) -> &'static [Tab] {
        match self {
            Role::Administrator | Role::Maintenance => {
                &[Tab::Dashboard, Tab::Reports, Tab::Configuration]
            }
            Role::Operator => &[Tab::Dashboard, Tab::Reports],
        }
    }

    pub fn can_see(&self, tab: Tab) -> bool {
        self.visible_tabs().contains(&tab)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Administrator => "Administrator",
            Role::Maintenance => "Maintenance",
            Role::Operator => "Operator",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "administrator" | "admin" => Ok(Role::Administrator),
            "maintenance" => Ok(Role::Maintenance),
            "operator" => Ok(Role::Operator),
            _ => Err(format!(
                "unknown role '{value}' (expected administrator, maintenance or operator)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Configuration,
    Reports,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Dashboard => "Dashboard",
            Tab::Configuration => "Configuration",
            Tab::Reports => "Reports",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("no role selected")]
    NotLoggedIn,
    #[error("{tab} is not available for role {role}")]
    TabHidden { role: Role, tab: Tab },
}

/// Navigation state of one user session. Every change goes through a setter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSession {
    role: Option<Role>,
    active_tab: Tab,
    selected_process: ProcessSelection,
}

impl AppSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_process(&self) -> ProcessSelection {
        self.selected_process
    }

    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn logout(&mut self) {
        self.role = None;
        self.active_tab = Tab::Dashboard;
    }

    pub fn visible_tabs(&self) -> &'static [Tab] {
        match self.role {
            Some(role) => role.visible_tabs(),
            None => &[],
        }
    }

    pub fn require_tab(&self, tab: Tab) -> Result<Role, SessionError> {
        let role = self.role.ok_or(SessionError::NotLoggedIn)?;
        if !role.can_see(tab) {
            return Err(SessionError::TabHidden { role, tab });
        }
        Ok(role)
    }

    pub fn navigate(&mut self, tab: Tab) -> Result<(), SessionError> {
        self.require_tab(tab)?;
        self.active_tab = tab;
        Ok(())
    }

    pub fn select_process(&mut self, selection: ProcessSelection) {
        self.selected_process = selection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::process::ProcessArea;

    #[test]
    fn operator_cannot_open_configuration() {
        let mut session = AppSession::new();
        session.login(Role::Operator);

        assert_eq!(session.visible_tabs(), &[Tab::Dashboard, Tab::Reports]);
        assert_eq!(
            session.navigate(Tab::Configuration),
            Err(SessionError::TabHidden {
                role: Role::Operator,
                tab: Tab::Configuration
            })
        );
        assert_eq!(session.active_tab(), Tab::Dashboard);
        assert!(session.navigate(Tab::Reports).is_ok());
        assert_eq!(session.active_tab(), Tab::Reports);
    }

    #[test]
    fn maintenance_and_administrator_see_every_tab() {
        for role in [Role::Administrator, Role::Maintenance] {
            let mut session = AppSession::new();
            session.login(role);
            assert!(session.navigate(Tab::Configuration).is_ok());
            assert_eq!(session.visible_tabs().len(), 3);
        }
    }

    #[test]
    fn navigation_requires_a_role() {
        let mut session = AppSession::new();
        assert_eq!(session.navigate(Tab::Reports), Err(SessionError::NotLoggedIn));
        assert!(session.visible_tabs().is_empty());
    }

    #[test]
    fn logout_clears_role_and_returns_to_dashboard() {
        let mut session = AppSession::new();
        session.login(Role::Administrator);
        session.navigate(Tab::Configuration).unwrap();
        session.select_process(ProcessSelection::Area(ProcessArea::Drying));
        session.logout();

        assert_eq!(session.role(), None);
        assert_eq!(session.active_tab(), Tab::Dashboard);
        assert_eq!(
            session.selected_process(),
            ProcessSelection::Area(ProcessArea::Drying)
        );
    }

    #[test]
    fn role_parses_short_admin_alias() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!("Operator".parse::<Role>().unwrap(), Role::Operator);
        assert!("guest".parse::<Role>().is_err());
    }
}
