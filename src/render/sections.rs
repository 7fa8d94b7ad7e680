use crate::models::{ReadingMap, TelemetrySnapshot};

use super::format::{format_currency, format_temperature};
use super::labels::LabelTable;

/// Dashboard sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    CurrentCost,
    RecoveryCost,
    YearlyCost,
    YearlyRecovery,
    UnitCosts,
    Temperatures,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::CurrentCost,
        SectionKind::RecoveryCost,
        SectionKind::YearlyCost,
        SectionKind::YearlyRecovery,
        SectionKind::UnitCosts,
        SectionKind::Temperatures,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::CurrentCost => "現状のコスト",
            SectionKind::RecoveryCost => "排熱回収装置のコストメリット",
            SectionKind::YearlyCost => "年間コスト",
            SectionKind::YearlyRecovery => "年間コストメリット",
            SectionKind::UnitCosts => "単価",
            SectionKind::Temperatures => "リアルタイム温度",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SectionKind::CurrentCost | SectionKind::RecoveryCost => "円/h",
            SectionKind::YearlyCost | SectionKind::YearlyRecovery => "円/年",
            SectionKind::UnitCosts => "円/kWh",
            SectionKind::Temperatures => "°C",
        }
    }

    /// Where the section is placed on the page
    pub fn group(&self) -> SectionGroup {
        match self {
            SectionKind::CurrentCost | SectionKind::YearlyCost => SectionGroup::Baseline,
            SectionKind::RecoveryCost | SectionKind::YearlyRecovery => SectionGroup::Recovery,
            SectionKind::UnitCosts | SectionKind::Temperatures => SectionGroup::Reference,
        }
    }

    /// The part of the snapshot this section is built from
    pub fn source<'a>(&self, snapshot: &'a TelemetrySnapshot) -> Option<&'a ReadingMap> {
        match self {
            SectionKind::CurrentCost => snapshot.cost.as_ref()?.current.as_ref(),
            SectionKind::RecoveryCost => snapshot.cost.as_ref()?.recovery.as_ref(),
            SectionKind::YearlyCost => snapshot.cost.as_ref()?.yearly_current.as_ref(),
            SectionKind::YearlyRecovery => snapshot.cost.as_ref()?.yearly_recovery.as_ref(),
            SectionKind::UnitCosts => snapshot.unit_costs.as_ref(),
            SectionKind::Temperatures => snapshot.temperature.as_ref(),
        }
    }

    fn format_value(&self, value: Option<f64>) -> String {
        match self {
            SectionKind::Temperatures => format_temperature(value),
            _ => format_currency(value),
        }
    }
}

/// Page areas, following the baseline / recovery / reference split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionGroup {
    Baseline,
    Recovery,
    Reference,
}

impl SectionGroup {
    pub const ALL: [SectionGroup; 3] = [
        SectionGroup::Baseline,
        SectionGroup::Recovery,
        SectionGroup::Reference,
    ];

    /// CSS modifier for the group container
    pub fn class(&self) -> &'static str {
        match self {
            SectionGroup::Baseline => "group-baseline",
            SectionGroup::Recovery => "group-recovery",
            SectionGroup::Reference => "group-reference",
        }
    }
}

/// One labelled value
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub label: String,
    pub value: String,
    /// `None` when a temperature is missing, so the placeholder stands alone
    pub unit: Option<&'static str>,
}

impl Entry {
    /// Value with its unit, e.g. `120 円/h`
    pub fn display_value(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

/// A titled group of entries. No entries means the section shows its
/// "no data" fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn empty(kind: SectionKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build every section from a snapshot using the default label table
pub fn build_sections(snapshot: &TelemetrySnapshot) -> Vec<Section> {
    build_sections_with(snapshot, &LabelTable::default())
}

/// Build every section from a snapshot, entries in payload key order
pub fn build_sections_with(snapshot: &TelemetrySnapshot, labels: &LabelTable) -> Vec<Section> {
    SectionKind::ALL
        .iter()
        .map(|kind| build_section(*kind, kind.source(snapshot), labels))
        .collect()
}

/// Sections with no entries, used when there is nothing to show
pub fn empty_sections() -> Vec<Section> {
    SectionKind::ALL.iter().map(|kind| Section::empty(*kind)).collect()
}

fn build_section(kind: SectionKind, source: Option<&ReadingMap>, labels: &LabelTable) -> Section {
    let Some(readings) = source else {
        return Section::empty(kind);
    };

    let entries = readings
        .iter()
        .map(|(key, value)| {
            let unit = match (kind, value) {
                (SectionKind::Temperatures, None) => None,
                _ => Some(kind.unit()),
            };
            Entry {
                key: key.to_string(),
                label: labels.label_for(key).to_string(),
                value: kind.format_value(value),
                unit,
            }
        })
        .collect();

    Section { kind, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::labels::label_for;

    fn snapshot(json: &str) -> TelemetrySnapshot {
        serde_json::from_str(json).unwrap()
    }

    fn section(sections: &[Section], kind: SectionKind) -> &Section {
        sections.iter().find(|s| s.kind == kind).unwrap()
    }

    #[test]
    fn test_single_current_cost_entry() {
        let sections = build_sections(&snapshot(r#"{"cost": {"current": {"electricity": 120}}}"#));
        let current = section(&sections, SectionKind::CurrentCost);

        assert_eq!(current.entries.len(), 1);
        assert_eq!(current.entries[0].label, label_for("electricity"));
        assert_eq!(current.entries[0].label, "電気代");
        assert_eq!(current.entries[0].value, "120");
        assert_eq!(current.entries[0].display_value(), "120 円/h");

        for kind in SectionKind::ALL.iter().filter(|k| **k != SectionKind::CurrentCost) {
            assert!(section(&sections, *kind).is_empty(), "{:?} should be empty", kind);
        }
    }

    #[test]
    fn test_empty_payload_yields_only_fallbacks() {
        let sections = build_sections(&snapshot("{}"));

        assert_eq!(sections.len(), SectionKind::ALL.len());
        assert!(sections.iter().all(Section::is_empty));
        assert_eq!(sections, empty_sections());
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let sections = build_sections(&snapshot("{}"));
        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_entries_follow_payload_order() {
        let json = r#"{"cost": {"recovery": {"heavy_oil": 4, "gas": 2, "steam": 9, "electricity": 1}}}"#;
        let sections = build_sections(&snapshot(json));
        let recovery = section(&sections, SectionKind::RecoveryCost);

        let labels: Vec<&str> = recovery.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["重油代", "ガス代", "steam", "電気代"]);

        let keys: Vec<&str> = recovery.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["heavy_oil", "gas", "steam", "electricity"]);
    }

    #[test]
    fn test_null_sub_structures_yield_fallbacks() {
        let json = r#"{"cost": null, "unitCosts": null, "temperature": null}"#;
        let sections = build_sections(&snapshot(json));
        assert!(sections.iter().all(Section::is_empty));

        let json = r#"{"cost": {"current": null, "yearlyCurrent": {"gas": 10}}}"#;
        let sections = build_sections(&snapshot(json));
        assert!(section(&sections, SectionKind::CurrentCost).is_empty());
        assert_eq!(section(&sections, SectionKind::YearlyCost).entries.len(), 1);
    }

    #[test]
    fn test_missing_leaf_values_use_placeholders() {
        let json = r#"{
            "cost": {"yearlyRecovery": {"electricity": null}},
            "unitCosts": {"gas": null},
            "temperature": {"supply": null, "discharge": 31.5}
        }"#;
        let sections = build_sections(&snapshot(json));

        let yearly = &section(&sections, SectionKind::YearlyRecovery).entries[0];
        assert_eq!(yearly.value, "0.00");
        assert_eq!(yearly.display_value(), "0.00 円/年");

        let unit = &section(&sections, SectionKind::UnitCosts).entries[0];
        assert_eq!(unit.display_value(), "0.00 円/kWh");

        let temps = &section(&sections, SectionKind::Temperatures).entries;
        assert_eq!(temps[0].display_value(), "N/A");
        assert_eq!(temps[1].display_value(), "31.5 °C");
        assert_eq!(temps[1].label, "排出温度");
    }

    #[test]
    fn test_build_sections_is_idempotent() {
        let data = snapshot(
            r#"{"cost": {"current": {"gas": 3.5}, "recovery": {"gas": 1}},
                "temperature": {"supply": 50}}"#,
        );
        assert_eq!(build_sections(&data), build_sections(&data));
    }

    #[test]
    fn test_custom_label_table() {
        const TABLE: LabelTable = LabelTable::new(&[("gas", "Gas")]);
        let sections = build_sections_with(&snapshot(r#"{"unitCosts": {"gas": 8}}"#), &TABLE);
        assert_eq!(section(&sections, SectionKind::UnitCosts).entries[0].label, "Gas");
    }

    #[test]
    fn test_section_groups() {
        assert_eq!(SectionKind::CurrentCost.group(), SectionGroup::Baseline);
        assert_eq!(SectionKind::YearlyRecovery.group(), SectionGroup::Recovery);
        assert_eq!(SectionKind::Temperatures.group(), SectionGroup::Reference);
    }
}
