use super::*;

pub(crate) const ARCHIVE: &str = "https://xkcd.com";

const RELAY: &str = "https://corsproxy.io/?";

/// Client for the archive's numbered-JSON API, reached through a
/// CORS-bridging relay.
pub(crate) struct Archive {
  api: Api,
}

impl Default for Archive {
  fn default() -> Self {
    Self {
      api: Api::new(format!("{RELAY}{ARCHIVE}/")),
    }
  }
}

impl Archive {
  pub(crate) async fn latest(&self) -> Result<Comic, Error> {
    self.api.get("info.0.json").await
  }

  pub(crate) async fn comic(&self, id: u32) -> Result<Comic, Error> {
    self.api.get(&format!("{id}/info.0.json")).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoints_pass_through_the_relay() {
    let archive = Archive::default();

    assert_eq!(
      archive.api.endpoint("info.0.json").as_str(),
      "https://corsproxy.io/?https://xkcd.com/info.0.json",
    );

    assert_eq!(
      archive.api.endpoint("7/info.0.json").as_str(),
      "https://corsproxy.io/?https://xkcd.com/7/info.0.json",
    );
  }
}
