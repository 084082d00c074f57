use crate::structs::upgrade_request::UpgradeRequest;

/// Target of one label-classification rule in the version form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FromVersion,
    ToVersion,
    ProjectName,
    PackageName,
}

impl FormField {
    /// The request value that belongs in this field.
    pub fn value_from<'a>(&self, request: &'a UpgradeRequest) -> &'a str {
        match self {
            FormField::FromVersion => &request.from_version,
            FormField::ToVersion => &request.to_version,
            FormField::ProjectName => &request.project_name,
            FormField::PackageName => &request.package_name,
        }
    }
}
