use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    source: serde_json::Error,
    url: Url,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    source: reqwest::Error,
    url: Url,
  },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    status: StatusCode,
    url: Url,
  },
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_failing_url() {
    let url = Url::parse("https://xkcd.com/404/info.0.json").unwrap();

    assert_eq!(
      Error::Status {
        status: StatusCode::NOT_FOUND,
        url,
      }
      .to_string(),
      "response from https://xkcd.com/404/info.0.json failed with 404 Not Found",
    );
  }
}
