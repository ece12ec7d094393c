use super::*;

/// Metadata for a single comic as served by `<id>/info.0.json`. Fields the
/// widget does not render are ignored during deserialization.
#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct Comic {
  pub(crate) num: u32,
  pub(crate) title: String,
  pub(crate) img: String,
  pub(crate) alt: String,
  pub(crate) day: String,
  pub(crate) month: String,
  pub(crate) year: String,
}

impl Comic {
  pub(crate) fn label(&self) -> String {
    format!("#{}", self.num)
  }

  pub(crate) fn url(&self) -> String {
    format!("{ARCHIVE}/{}", self.num)
  }

  pub(crate) fn date(&self) -> String {
    format!("{}/{}/{}", self.day, self.month, self.year)
  }
}
