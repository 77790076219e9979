use crate::check::{DiagnosticRow, Status};

/// Rows produced for one managed domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRows {
    pub domain: String,
    pub rows: Vec<DiagnosticRow>,
}

/// Output of one validation run: mail host rows, then rows per domain in the order
/// the domains were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckResultSet {
    pub mail_host: Vec<DiagnosticRow>,
    pub domains: Vec<DomainRows>,
}

impl CheckResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rows` for `domain`. A name seen before keeps its position and has its
    /// rows replaced.
    pub fn insert_domain(&mut self, domain: impl Into<String>, rows: Vec<DiagnosticRow>) {
        let domain = domain.into();
        match self.domains.iter_mut().find(|entry| entry.domain == domain) {
            Some(entry) => entry.rows = rows,
            None => self.domains.push(DomainRows { domain, rows }),
        }
    }

    pub fn domain(&self, name: &str) -> Option<&[DiagnosticRow]> {
        self.domains
            .iter()
            .find(|entry| entry.domain == name)
            .map(|entry| entry.rows.as_slice())
    }

    /// Every row, mail host first.
    pub fn rows(&self) -> impl Iterator<Item = &DiagnosticRow> {
        self.mail_host
            .iter()
            .chain(self.domains.iter().flat_map(|entry| entry.rows.iter()))
    }

    pub fn worst_status(&self) -> Status {
        Status::worst(self.rows().map(|row| row.status))
    }

    pub fn has_errors(&self) -> bool {
        self.worst_status() == Status::Error
    }
}

#[cfg(feature = "with-serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

    use super::{CheckResultSet, DomainRows};

    struct DomainMap<'a>(&'a [DomainRows]);

    impl Serialize for DomainMap<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for entry in self.0 {
                map.serialize_entry(&entry.domain, &entry.rows)?;
            }
            map.end()
        }
    }

    /// `{"mailHost": [...], "domains": {"example.com": [...]}}`, domains in run order.
    impl Serialize for CheckResultSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("CheckResultSet", 2)?;
            state.serialize_field("mailHost", &self.mail_host)?;
            state.serialize_field("domains", &DomainMap(&self.domains))?;
            state.end()
        }
    }
}
