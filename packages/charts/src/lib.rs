//! Sample song sheets embedded at build time from `charts/*.cifra`.

/// One embedded `.cifra` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chart {
    /// File name, e.g. `santo.cifra`
    pub name: &'static str,
    pub content: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/charts.rs"));

impl Chart {
    /// File name without the `.cifra` extension
    pub fn slug(&self) -> &'static str {
        self.name.strip_suffix(".cifra").unwrap_or(self.name)
    }
}

/// Every embedded chart, sorted by file name
pub fn get_all_charts() -> &'static [Chart] {
    CHARTS
}

/// Look a chart up by file name or slug (`"santo.cifra"` or `"santo"`)
pub fn get_chart(name: &str) -> Option<&'static Chart> {
    CHARTS
        .iter()
        .find(|chart| chart.name == name || chart.slug() == name)
}

pub fn list_charts() -> Vec<&'static str> {
    CHARTS.iter().map(|chart| chart.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_or_slug() {
        let by_name = get_chart("santo.cifra").unwrap();
        let by_slug = get_chart("santo").unwrap();
        assert_eq!(by_name, by_slug);
        assert_eq!(by_slug.slug(), "santo");
    }

    #[test]
    fn test_charts_are_sorted() {
        let names = list_charts();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
