/// Static lookup from payload keys to display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    entries: &'static [(&'static str, &'static str)],
}

/// Energy sources and sensor positions known to the dashboard
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("electricity", "電気代"),
    ("gas", "ガス代"),
    ("kerosene", "灯油代"),
    ("heavy_oil", "重油代"),
    ("supply", "供給温度"),
    ("discharge", "排出温度"),
];

impl LabelTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label for `raw_key`, or the key itself when the table has no entry
    pub fn label_for<'a>(&self, raw_key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(key, _)| *key == raw_key)
            .map(|(_, label)| *label)
            .unwrap_or(raw_key)
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}

/// Look up `raw_key` in the default label table
pub fn label_for(raw_key: &str) -> &str {
    LabelTable::default().label_for(raw_key)
}
