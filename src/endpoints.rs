use std::collections::HashMap;

pub type Arguments = HashMap<&'static str, String>;

/// Static description of one Marker API route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub template: &'static str,
    pub params: &'static [&'static str],
    pub needs_term: bool,
    pub term_param: Option<&'static str>,
    pub defaults: &'static [(&'static str, &'static str)],
}

pub const SERIAL_NUMBER_SEARCH: &str = "Serial Number Search";
pub const TRADEMARK_SEARCH: &str = "Trademark Search";
pub const DESCRIPTION_SEARCH: &str = "Description Search";
pub const OWNER_SEARCH: &str = "Owner Search";
pub const EXPIRATION_SEARCH: &str = "Expiration Search";

pub static ENDPOINTS: [Endpoint; 5] = [
    Endpoint {
        name: SERIAL_NUMBER_SEARCH,
        template: "/serialnumber/{serial_number}",
        params: &["serial_number"],
        needs_term: true,
        term_param: Some("serial_number"),
        defaults: &[],
    },
    Endpoint {
        name: TRADEMARK_SEARCH,
        template: "/trademark/{search_term}/status/{status}/start/{start}",
        params: &["search_term", "status", "start"],
        needs_term: true,
        term_param: Some("search_term"),
        defaults: &[("status", "all"), ("start", "0")],
    },
    Endpoint {
        name: DESCRIPTION_SEARCH,
        template: "/description/{search_term}/status/{status}/start/{start}",
        params: &["search_term", "status", "start"],
        needs_term: true,
        term_param: Some("search_term"),
        defaults: &[("status", "all"), ("start", "0")],
    },
    Endpoint {
        name: OWNER_SEARCH,
        template: "/owner/{search_term}/start/{start}",
        params: &["search_term", "start"],
        needs_term: true,
        term_param: Some("search_term"),
        defaults: &[("start", "0")],
    },
    Endpoint {
        name: EXPIRATION_SEARCH,
        template: "/expiring/{expiring}/start/{start}",
        params: &["expiring", "start"],
        needs_term: false,
        term_param: None,
        defaults: &[("expiring", "6 months"), ("start", "0")],
    },
];

pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

impl Endpoint {
    /// Substitute every declared parameter token in the template.
    ///
    /// A parameter with no argument becomes the empty string, so a missing
    /// serial number resolves to `/serialnumber/`.
    pub fn resolve(&self, args: &Arguments) -> String {
        let mut path = self.template.to_string();
        for param in self.params {
            let value = args.get(param).map(String::as_str).unwrap_or_else(|| {
                log::debug!("{}: no value for '{}', substituting empty string", self.name, param);
                ""
            });
            path = path.replace(&format!("{{{param}}}"), value);
        }
        path
    }

    pub fn arguments(&self, term: &str) -> Arguments {
        let mut args: Arguments = self
            .defaults
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();

        if self.needs_term {
            if let Some(param) = self.term_param {
                args.insert(param, term.to_string());
            }
        }
        args
    }
}
