use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "comic.html")]
pub(crate) struct ComicHtml {
  pub(crate) comic: Comic,
}

#[derive(Boilerplate)]
#[boilerplate(filename = "failure.html")]
pub(crate) struct FailureHtml;

#[derive(Boilerplate)]
#[boilerplate(filename = "loading.html")]
pub(crate) struct LoadingHtml;
