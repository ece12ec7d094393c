use super::*;

pub struct Api {
  base: String,
}

impl Api {
  pub fn new(base: impl Into<String>) -> Self {
    Self { base: base.into() }
  }

  pub fn endpoint(&self, path: &str) -> Url {
    Url::parse(&format!("{}{path}", self.base)).unwrap()
  }

  pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
    let url = self.endpoint(path);

    let response = reqwest::Client::new()
      .get(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    serde_json::from_slice(&body).with_context(|_| error::Deserialize { url: url.clone() })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoints_append_the_path_to_the_base() {
    let api = Api::new("https://example.com/archive/");

    assert_eq!(
      api.endpoint("info.0.json").as_str(),
      "https://example.com/archive/info.0.json",
    );
  }

  #[test]
  fn endpoints_preserve_a_query_string_base() {
    let api = Api::new("https://corsproxy.io/?https://xkcd.com/");

    assert_eq!(
      api.endpoint("7/info.0.json").as_str(),
      "https://corsproxy.io/?https://xkcd.com/7/info.0.json",
    );
  }
}
