//! Mock user session.
//!
//! There is no real authentication: logging in or registering always
//! succeeds and produces a fixed mock [`User`]. The user is persisted as
//! JSON under the key [`USER_KEY`] in a [`SessionStore`], so a session can
//! be torn down and restored later from the same store.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store key holding the signed-in user.
pub const USER_KEY: &str = "user";

const MOCK_USER_ID: &str = "1";
const MOCK_USER_NAME: &str = "John Doe";
const MOCK_AVATAR: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1";

/// Errors raised by a session or its store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O failed: {0}")]
    Store(#[from] io::Error),

    #[error("stored record `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

/// String key-value persistence behind a [`Session`].
pub trait SessionStore {
    /// Returns the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Directory-backed store holding one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// A mock user session over a [`SessionStore`].
///
/// ```
/// use planboard::session::{MemoryStore, Session};
///
/// let mut session = Session::init(MemoryStore::new()).unwrap();
/// session.login("ada@example.com", "secret").unwrap();
///
/// // The user survives a restart over the same store.
/// let store = session.teardown();
/// let session = Session::init(store).unwrap();
/// assert_eq!(session.current_user().unwrap().email(), "ada@example.com");
/// ```
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    /// Starts a session, restoring any user saved in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] if the stored record is not a valid
    /// user, and [`SessionError::Store`] if the store cannot be read.
    pub fn init(store: S) -> Result<Self, SessionError> {
        let user = match store.load(USER_KEY)? {
            Some(record) => Some(serde_json::from_str::<User>(&record).map_err(|source| {
                SessionError::Corrupt {
                    key: USER_KEY.to_string(),
                    source,
                }
            })?),
            None => None,
        };

        debug!(restored = user.is_some(); "Session initialised");
        Ok(Self { store, user })
    }

    /// Signs in. Any credentials are accepted.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&User, SessionError> {
        let user = User::new(MOCK_USER_ID, MOCK_USER_NAME, email).with_avatar(MOCK_AVATAR);
        self.sign_in(user)
    }

    /// Registers and signs in. Any credentials are accepted.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<&User, SessionError> {
        let user = User::new(MOCK_USER_ID, name, email).with_avatar(MOCK_AVATAR);
        self.sign_in(user)
    }

    /// Signs out and forgets the stored user.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.remove(USER_KEY)?;
        self.user = None;
        info!("Signed out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Ends the session and returns its store.
    pub fn teardown(self) -> S {
        debug!(authenticated = self.user.is_some(); "Session torn down");
        self.store
    }

    fn sign_in(&mut self, user: User) -> Result<&User, SessionError> {
        let record = serde_json::to_string(&user).map_err(|source| SessionError::Corrupt {
            key: USER_KEY.to_string(),
            source,
        })?;
        self.store.save(USER_KEY, &record)?;

        info!(user_id = user.id(), email = user.email(); "Signed in");
        Ok(&*self.user.insert(user))
    }
}
