use std::collections::BTreeMap;
use std::fmt;

/// Per-field error messages. A field without an entry is valid.
pub type FieldErrors<F> = BTreeMap<F, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactInquiry {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub query: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    PhoneNumber,
    Email,
    Query,
}

impl ContactInquiry {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Email => &self.email,
            ContactField::Query => &self.query,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::PhoneNumber => self.phone_number = value,
            ContactField::Email => self.email = value,
            ContactField::Query => self.query = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    MiddleEastAfrica,
    Other,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::LatinAmerica,
        Region::MiddleEastAfrica,
        Region::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::LatinAmerica => "Latin America",
            Region::MiddleEastAfrica => "Middle East & Africa",
            Region::Other => "Other",
        }
    }

    /// Looks a region up by its select-box label. "Please Select" and
    /// anything unknown map to `None`.
    pub fn from_label(label: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompanyType {
    MobileAppDeveloper,
    GameStudio,
    ECommerce,
    MediaPublishing,
    Enterprise,
    Agency,
    Other,
}

impl CompanyType {
    pub const ALL: [CompanyType; 7] = [
        CompanyType::MobileAppDeveloper,
        CompanyType::GameStudio,
        CompanyType::ECommerce,
        CompanyType::MediaPublishing,
        CompanyType::Enterprise,
        CompanyType::Agency,
        CompanyType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyType::MobileAppDeveloper => "Mobile App Developer",
            CompanyType::GameStudio => "Game Studio",
            CompanyType::ECommerce => "E-commerce",
            CompanyType::MediaPublishing => "Media & Publishing",
            CompanyType::Enterprise => "Enterprise",
            CompanyType::Agency => "Agency",
            CompanyType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<CompanyType> {
        CompanyType::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoRequest {
    pub first_name: String,
    pub last_name: String,
    pub work_email: String,
    pub company_name: String,
    pub company_role: String,
    pub region: Option<Region>,
    pub company_type: Option<CompanyType>,
    pub expectations: String,
    pub linkedin_profile: String, // empty when not provided
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DemoField {
    FirstName,
    LastName,
    WorkEmail,
    CompanyName,
    CompanyRole,
    Region,
    CompanyType,
    Expectations,
    LinkedinProfile,
}

impl DemoField {
    pub const ALL: [DemoField; 9] = [
        DemoField::FirstName,
        DemoField::LastName,
        DemoField::WorkEmail,
        DemoField::CompanyName,
        DemoField::CompanyRole,
        DemoField::Region,
        DemoField::CompanyType,
        DemoField::Expectations,
        DemoField::LinkedinProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoField::FirstName => "firstName",
            DemoField::LastName => "lastName",
            DemoField::WorkEmail => "workEmail",
            DemoField::CompanyName => "companyName",
            DemoField::CompanyRole => "companyRole",
            DemoField::Region => "region",
            DemoField::CompanyType => "companyType",
            DemoField::Expectations => "expectations",
            DemoField::LinkedinProfile => "linkedinProfile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoField::FirstName => "First name",
            DemoField::LastName => "Last name",
            DemoField::WorkEmail => "Work email",
            DemoField::CompanyName => "Company name",
            DemoField::CompanyRole => "Company role",
            DemoField::Region => "Region",
            DemoField::CompanyType => "Company type",
            DemoField::Expectations => "Expectations",
            DemoField::LinkedinProfile => "LinkedIn profile",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DemoField::LinkedinProfile)
    }
}

impl DemoRequest {
    /// Current value as it would appear in the form control.
    pub fn get(&self, field: DemoField) -> &str {
        match field {
            DemoField::FirstName => &self.first_name,
            DemoField::LastName => &self.last_name,
            DemoField::WorkEmail => &self.work_email,
            DemoField::CompanyName => &self.company_name,
            DemoField::CompanyRole => &self.company_role,
            DemoField::Region => self.region.map(|r| r.label()).unwrap_or(""),
            DemoField::CompanyType => self.company_type.map(|t| t.label()).unwrap_or(""),
            DemoField::Expectations => &self.expectations,
            DemoField::LinkedinProfile => &self.linkedin_profile,
        }
    }

    pub fn set(&mut self, field: DemoField, value: String) {
        match field {
            DemoField::FirstName => self.first_name = value,
            DemoField::LastName => self.last_name = value,
            DemoField::WorkEmail => self.work_email = value,
            DemoField::CompanyName => self.company_name = value,
            DemoField::CompanyRole => self.company_role = value,
            DemoField::Region => self.region = Region::from_label(&value),
            DemoField::CompanyType => self.company_type = CompanyType::from_label(&value),
            DemoField::Expectations => self.expectations = value,
            DemoField::LinkedinProfile => self.linkedin_profile = value,
        }
    }

    pub fn linkedin(&self) -> Option<&str> {
        let trimmed = self.linkedin_profile.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_labels_parse_back() {
        for region in Region::ALL {
            assert_eq!(Region::from_label(region.label()), Some(region));
        }
        assert_eq!(Region::from_label("Please Select"), None);
        assert_eq!(Region::from_label(""), None);
    }

    #[test]
    fn company_type_rejects_unknown_labels() {
        assert_eq!(CompanyType::from_label("Game Studio"), Some(CompanyType::GameStudio));
        assert_eq!(CompanyType::from_label("game studio"), None);
    }

    #[test]
    fn demo_select_fields_round_through_set_and_get() {
        let mut demo = DemoRequest::default();
        demo.set(DemoField::Region, "Middle East & Africa".to_string());
        assert_eq!(demo.region, Some(Region::MiddleEastAfrica));
        assert_eq!(demo.get(DemoField::Region), "Middle East & Africa");

        demo.set(DemoField::Region, String::new());
        assert_eq!(demo.region, None);
        assert_eq!(demo.get(DemoField::Region), "");
    }

    #[test]
    fn blank_linkedin_counts_as_absent() {
        let mut demo = DemoRequest::default();
        demo.linkedin_profile = "   ".to_string();
        assert_eq!(demo.linkedin(), None);
        demo.linkedin_profile = " https://linkedin.com/in/jane ".to_string();
        assert_eq!(demo.linkedin(), Some("https://linkedin.com/in/jane"));
    }
}
