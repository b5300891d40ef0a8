extern crate log;
extern crate regex;
extern crate reqwest;

use super::search::HtmlRegex;
use crate::{
    config::{session::VERBOSE, url::BASE},
    error::{network_error, parse_error, Error, Kind, Result},
    types::{Cookie, LoginInfo},
};
use log::{debug, warn};
use regex::Regex;
use reqwest::{
    cookie::{CookieStore, Jar},
    header::{HeaderValue, LOCATION},
    redirect::Policy,
    Client, ClientBuilder, Response, Url,
};
use std::sync::{Arc, RwLock};

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
const LOGIN_PATH: &str = "/index.php?option=com_comprofiler&task=login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Follow,
    /// Hand back the 3xx response itself so its `Location` can be read.
    Stop,
}

pub(super) struct RegexSet {
    login_form: Regex,
    logout: Regex,
    pub(super) html: HtmlRegex,
}
impl RegexSet {
    fn new() -> Self {
        Self {
            login_form: Regex::new(r#"(?is)<form[^>]*mod_loginform[^>]*>(.*?)</form>"#).unwrap(),
            logout: Regex::new(r"(?i)task=logout|>\s*logout\s*<").unwrap(),
            html: HtmlRegex::new(),
        }
    }
}

/// Cookie jar that also remembers, in arrival order, every cookie it accepted
/// together with the url that set it.
#[derive(Default)]
pub(crate) struct RecordingJar {
    jar: Jar,
    seen: RwLock<Vec<(Cookie, Url)>>,
}
impl RecordingJar {
    fn add(&self, cookie: &Cookie, url: &Url) {
        match HeaderValue::from_str(&cookie.to_set_cookie()) {
            Ok(v) => self.set_cookies(&mut std::iter::once(&v), url),
            Err(_) => warn!("Skipping malformed cookie {}", cookie.name),
        }
    }
    /// Recorded cookies the jar still holds, i.e. not expired or overwritten.
    fn live(&self) -> Vec<Cookie> {
        let seen = match self.seen.read() {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };
        seen.iter()
            .filter(|(c, url)| {
                self.jar
                    .cookies(url)
                    .and_then(|h| h.to_str().map(|h| sent_names(h).any(|n| n == c.name)).ok())
                    .unwrap_or(false)
            })
            .map(|(c, _)| c.clone())
            .collect()
    }
}
impl CookieStore for RecordingJar {
    fn set_cookies(&self, headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let headers: Vec<HeaderValue> = headers.cloned().collect();
        if let Ok(mut seen) = self.seen.write() {
            for cookie in headers
                .iter()
                .filter_map(|h| h.to_str().ok())
                .filter_map(Cookie::from_set_cookie)
            {
                seen.retain(|(c, _)| !c.same_slot(&cookie));
                seen.push((cookie, url.clone()));
            }
        }
        self.jar.set_cookies(&mut headers.iter(), url);
    }
    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.jar.cookies(url)
    }
}

/// Http context shared by every request of one run.
///
/// Both clients share one cookie jar; they differ only in redirect policy.
pub struct Session {
    client: Client,
    no_redirect: Client,
    jar: Arc<RecordingJar>,
    pub(super) base: Url,
    pub(super) regex: RegexSet,
}
impl Session {
    fn from_jar(jar: Arc<RecordingJar>) -> Result<Self> {
        let builder = || -> ClientBuilder {
            Client::builder()
                .user_agent(FIREFOX_UA)
                .cookie_provider(jar.clone())
                .connection_verbose(VERBOSE)
        };
        Ok(Session {
            client: builder().build().map_err(network_error)?,
            no_redirect: builder()
                .redirect(Policy::none())
                .build()
                .map_err(network_error)?,
            base: Url::parse(BASE).map_err(|e| parse_error(e.to_string()))?,
            jar,
            regex: RegexSet::new(),
        })
    }
    pub fn anonymous() -> Result<Self> {
        Self::from_jar(Arc::new(RecordingJar::default()))
    }
    /// Session acting as the user saved in `info`.
    pub fn with_login(info: &LoginInfo) -> Result<Self> {
        let ret = Self::anonymous()?;
        for c in &info.cookies {
            ret.jar.add(c, &ret.base);
        }
        debug!(
            "Restored {} cookies for {}",
            info.cookies.len(),
            info.username
        );
        Ok(ret)
    }

    pub(crate) fn client(&self, redirect: Redirect) -> &Client {
        match redirect {
            Redirect::Follow => &self.client,
            Redirect::Stop => &self.no_redirect,
        }
    }
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE, path)
    }
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)
    }
    pub(crate) async fn post_form<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
        redirect: Redirect,
    ) -> Result<Response> {
        debug!("POST {} ({:?})", url, redirect);
        self.client(redirect)
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(network_error)
    }

    /// Live cookies with their scope, in the order the judge set them.
    pub fn cookies(&self) -> Vec<Cookie> {
        self.jar.live()
    }

    /// Logs in with the judge's login form and returns the credentials to persist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginInfo> {
        let home = self.get_text(BASE).await?;
        let form = self
            .regex
            .login_form
            .captures(&home)
            .and_then(|c| c.get(1))
            .map_or(home.as_str(), |m| m.as_str());
        let mut fields = self.regex.html.hidden_fields(form);
        fields.retain(|(name, _)| name != "username" && name != "passwd");
        fields.push(("username".to_string(), username.to_string()));
        fields.push(("passwd".to_string(), password.to_string()));
        fields.push(("remember".to_string(), "yes".to_string()));
        fields.push(("Submit".to_string(), "Login".to_string()));
        let body = self
            .post_form(&self.url(LOGIN_PATH), &fields, Redirect::Follow)
            .await?
            .error_for_status()
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)?;
        if !self.regex.logout.is_match(&body) {
            return Err(Error::with_description(Kind::Login, username));
        }
        Ok(LoginInfo {
            username: username.to_string(),
            cookies: self.cookies(),
        })
    }
}

pub(super) fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Names in a `Cookie` request header.
fn sent_names(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('=').map(|(name, _)| name))
}
