use chrono::NaiveDateTime;

/// One normalized alert message: a single retained information block of a
/// feed entry, flattened together with its areas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alert {
    pub headline: String,
    pub description: String,
    pub instruction: String,
    /// Sender / organization name.
    pub issuer: String,
    /// `None` when the feed's timestamp was missing or malformed.
    pub effective: Option<NaiveDateTime>,
    pub expires: Option<NaiveDateTime>,
    /// Areas in feed order.
    pub areas: Vec<AlertArea>,
}

impl Alert {
    /// Area names in feed order, for display.
    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(|a| a.name.as_str())
    }
}

/// A named geographic region within an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertArea {
    pub name: String,
    /// Numeric area codes; legitimately empty.
    pub geocodes: Vec<i64>,
}

/// The normalized, owned result of one feed load.
///
/// Built once by the normalizer and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertCollection {
    alerts: Vec<Alert>,
}

impl AlertCollection {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Alert> {
        self.alerts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }
}

impl<'a> IntoIterator for &'a AlertCollection {
    type Item = &'a Alert;
    type IntoIter = std::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.alerts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_alert(headline: &str, areas: &[&str]) -> Alert {
        Alert {
            headline: headline.to_string(),
            areas: areas
                .iter()
                .map(|name| AlertArea {
                    name: name.to_string(),
                    geocodes: Vec::new(),
                })
                .collect(),
            ..Alert::default()
        }
    }

    #[test]
    fn default_alert_has_empty_fields() {
        let a = Alert::default();
        assert_eq!(a.headline, "");
        assert_eq!(a.issuer, "");
        assert!(a.effective.is_none());
        assert!(a.expires.is_none());
        assert!(a.areas.is_empty());
    }

    #[test]
    fn area_names_keep_order() {
        let a = make_alert("x", &["Ottawa", "Gatineau", "Kanata"]);
        let names: Vec<&str> = a.area_names().collect();
        assert_eq!(names, vec!["Ottawa", "Gatineau", "Kanata"]);
    }

    #[test]
    fn collection_accessors() {
        let c = AlertCollection::new(vec![make_alert("a", &[]), make_alert("b", &[])]);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert_eq!(c.get(1).map(|a| a.headline.as_str()), Some("b"));
        assert!(c.get(2).is_none());
        let headlines: Vec<&str> = c.iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(headlines, vec!["a", "b"]);
    }

    #[test]
    fn empty_collection() {
        let c = AlertCollection::empty();
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert!(c.get(0).is_none());
    }
}
