//! # Profile page state
//!
//! A profile page shows one user's [`Profile`] snapshot under four tabs and,
//! for the owner only, an inline settings editor for username, description and
//! avatar.
//!
//! ## Edit mode
//!
//! | From | Action | To |
//! |------|--------|----|
//! | `Viewing` | [`enter_settings_edit`](ProfilePage::enter_settings_edit) (owner only) | `Editing`, draft seeded from the snapshot |
//! | `Editing` | [`request_exit`](ProfilePage::request_exit), draft unchanged | `Viewing` |
//! | `Editing` | [`request_exit`](ProfilePage::request_exit), draft changed | `Editing` with `confirm_discard` raised |
//! | `Editing` | [`confirm_exit`](ProfilePage::confirm_exit) | `Viewing`, draft dropped |
//! | `Editing` | [`apply_save`](ProfilePage::apply_save) | `Viewing` on success, `Editing` on failure |
//!
//! ## Saving
//!
//! [`save_settings`] validates the draft. When anything differs from the
//! snapshot it sends `update_settings` with the draft's username and
//! description, then `update_avatar` when a cropped blob is pending. Only the
//! settings result decides whether editing ends. Both outcomes are folded into
//! a single [`SaveOutcome`] with one notice.

use api::{AccountApi, Profile, SettingsUpdate, UserInfo};

use crate::avatar::data_url;
use crate::notice::{Notice, GENERIC_FAILURE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Rules,
    Rulesets,
    Environments,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Overview,
        ProfileTab::Rules,
        ProfileTab::Rulesets,
        ProfileTab::Environments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Rules => "Rules",
            ProfileTab::Rulesets => "Rulesets",
            ProfileTab::Environments => "Environments",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileLoad {
    #[default]
    Loading,
    Loaded(Profile),
    NotFound,
    Failed(String),
}

impl ProfileLoad {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileLoad::Loaded(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Edited values of the owner's settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub username: String,
    pub description: String,
    /// Cropped PNG waiting for the next save.
    pub avatar: Option<Vec<u8>>,
}

impl SettingsDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            description: profile.description.clone(),
            avatar: None,
        }
    }

    pub fn text_changed(&self, profile: &Profile) -> bool {
        self.username != profile.username || self.description != profile.description
    }

    pub fn is_dirty(&self, profile: &Profile) -> bool {
        self.text_changed(profile) || self.avatar.is_some()
    }

    /// Preview source for the pending avatar, if any.
    pub fn avatar_preview(&self) -> Option<String> {
        self.avatar.as_deref().map(|png| data_url("image/png", png))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePage {
    pub load: ProfileLoad,
    pub tab: ProfileTab,
    pub mode: EditMode,
    pub draft: SettingsDraft,
    /// Ask the user before discarding a changed draft.
    pub confirm_discard: bool,
    pub saving: bool,
}

/// Outcome of one save attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    /// Rejected before any call was made.
    Invalid(Notice),
    /// Nothing differs from the snapshot; no call was made.
    NoChanges,
    Finished {
        /// Result of `update_settings`, sent on every save with changes.
        settings: bool,
        /// Result of `update_avatar`, if it was sent.
        avatar: Option<bool>,
    },
}

impl SaveOutcome {
    /// Whether editing ends. The avatar upload never decides this.
    pub fn closes_editor(&self) -> bool {
        match self {
            SaveOutcome::Invalid(_) => false,
            SaveOutcome::NoChanges => true,
            SaveOutcome::Finished { settings, .. } => *settings,
        }
    }

    /// Whether anything was stored and the snapshot should be re-fetched.
    pub fn needs_refetch(&self) -> bool {
        matches!(
            self,
            SaveOutcome::Finished { settings, avatar }
                if *settings || *avatar == Some(true)
        )
    }

    /// The single notice reported for this save.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SaveOutcome::Invalid(notice) => Some(notice.clone()),
            SaveOutcome::NoChanges => None,
            SaveOutcome::Finished { settings, avatar } => Some(match (settings, avatar) {
                (true, None | Some(true)) => Notice::success("Profile updated"),
                (true, Some(false)) => {
                    Notice::error("Profile updated, but the avatar could not be uploaded")
                }
                (false, Some(true)) => {
                    Notice::error("Avatar updated, but your profile details could not be saved")
                }
                (false, _) => Notice::error("Could not update your profile"),
            }),
        }
    }
}

impl ProfilePage {
    pub fn is_owner(&self, viewer: Option<&UserInfo>) -> bool {
        match (self.load.profile(), viewer) {
            (Some(profile), Some(viewer)) => profile.id == viewer.id,
            _ => false,
        }
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Replace the snapshot. Leaves edit mode if the profile is gone.
    pub fn apply_load(&mut self, load: ProfileLoad) {
        if load.profile().is_none() {
            self.mode = EditMode::Viewing;
            self.confirm_discard = false;
        }
        self.load = load;
    }

    /// Start editing. Only the owner can edit, and only from `Viewing`.
    pub fn enter_settings_edit(&mut self, viewer: Option<&UserInfo>) -> bool {
        if self.mode != EditMode::Viewing || !self.is_owner(viewer) {
            return false;
        }
        let Some(profile) = self.load.profile() else {
            return false;
        };
        self.draft = SettingsDraft::from_profile(profile);
        self.mode = EditMode::Editing;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.load
            .profile()
            .is_some_and(|profile| self.draft.is_dirty(profile))
    }

    /// Leave editing directly if nothing changed, otherwise ask first.
    pub fn request_exit(&mut self) {
        if self.mode != EditMode::Editing {
            return;
        }
        if self.is_dirty() {
            self.confirm_discard = true;
        } else {
            self.stop_editing();
        }
    }

    pub fn confirm_exit(&mut self) {
        if self.confirm_discard {
            self.stop_editing();
        }
    }

    pub fn cancel_exit(&mut self) {
        self.confirm_discard = false;
    }

    fn stop_editing(&mut self) {
        self.mode = EditMode::Viewing;
        self.confirm_discard = false;
        self.draft = SettingsDraft::default();
    }

    /// Mark a save as started. Returns `false` while one is already running.
    pub fn begin_save(&mut self) -> bool {
        if self.saving || self.mode != EditMode::Editing {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn apply_save(&mut self, outcome: &SaveOutcome) {
        self.saving = false;
        if outcome.closes_editor() {
            self.stop_editing();
        } else if let SaveOutcome::Finished { avatar: Some(true), .. } = outcome {
            // The avatar went through even though the details did not.
            self.draft.avatar = None;
        }
    }
}

/// Load a profile snapshot.
pub async fn fetch_profile<A: AccountApi>(api: &A, user_id: &str) -> ProfileLoad {
    match api.get_user_profile(user_id).await {
        Ok(profile) if profile.exists() => ProfileLoad::Loaded(profile),
        Ok(_) => ProfileLoad::NotFound,
        Err(e) if e.is_not_found() => ProfileLoad::NotFound,
        Err(e) => {
            tracing::warn!("Loading profile {} failed: {}", user_id, e);
            ProfileLoad::Failed(GENERIC_FAILURE.to_string())
        }
    }
}

/// Save the owner's settings.
pub async fn save_settings<A: AccountApi>(
    api: &A,
    snapshot: &Profile,
    draft: &SettingsDraft,
) -> SaveOutcome {
    if draft.username.is_empty() {
        return SaveOutcome::Invalid(Notice::error("Username cannot be empty"));
    }
    if !draft.is_dirty(snapshot) {
        return SaveOutcome::NoChanges;
    }

    let update = SettingsUpdate {
        username: draft.username.clone(),
        description: draft.description.clone(),
    };
    let settings = api.update_settings(&update).await.unwrap_or_else(|e| {
        tracing::warn!("Settings update failed: {}", e);
        false
    });

    let avatar = match draft.avatar.as_deref() {
        Some(png) => Some(api.update_avatar(png).await.unwrap_or_else(|e| {
            tracing::warn!("Avatar upload failed: {}", e);
            false
        })),
        None => None,
    };

    SaveOutcome::Finished { settings, avatar }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiCall, MemoryApi};

    fn ada() -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "ada".into(),
            email: None,
            avatar_url: None,
        }
    }

    fn ada_profile() -> Profile {
        Profile {
            id: "1".into(),
            username: "ada".into(),
            description: "analyst".into(),
            avatar_url: None,
        }
    }

    fn loaded_page() -> ProfilePage {
        let mut page = ProfilePage::default();
        page.apply_load(ProfileLoad::Loaded(ada_profile()));
        page
    }

    fn editing_page() -> ProfilePage {
        let mut page = loaded_page();
        assert!(page.enter_settings_edit(Some(&ada())));
        page
    }

    #[tokio::test]
    async fn fetch_maps_missing_profiles_to_not_found() {
        let api = MemoryApi::new()
            .with_profile(ada_profile())
            .with_profile(Profile {
                id: "ghost".into(),
                ..Profile::default()
            });

        assert_eq!(fetch_profile(&api, "1").await, ProfileLoad::Loaded(ada_profile()));
        assert_eq!(fetch_profile(&api, "ghost").await, ProfileLoad::NotFound);
        assert_eq!(fetch_profile(&api, "404").await, ProfileLoad::NotFound);

        api.set_offline(true);
        assert!(matches!(fetch_profile(&api, "1").await, ProfileLoad::Failed(_)));
    }

    #[test]
    fn tabs_switch_freely() {
        let mut page = loaded_page();
        assert_eq!(page.tab, ProfileTab::Overview);
        for tab in ProfileTab::ALL.into_iter().rev() {
            page.select_tab(tab);
            assert_eq!(page.tab, tab);
        }
    }

    #[test]
    fn only_the_owner_can_edit() {
        let mut page = loaded_page();
        let mut stranger = ada();
        stranger.id = "2".into();

        assert!(!page.enter_settings_edit(None));
        assert!(!page.enter_settings_edit(Some(&stranger)));
        assert_eq!(page.mode, EditMode::Viewing);

        assert!(page.enter_settings_edit(Some(&ada())));
        assert_eq!(page.mode, EditMode::Editing);
        assert_eq!(page.draft, SettingsDraft::from_profile(&ada_profile()));

        // Already editing
        assert!(!page.enter_settings_edit(Some(&ada())));
    }

    #[test]
    fn unchanged_draft_exits_without_asking() {
        let mut page = editing_page();
        page.request_exit();
        assert_eq!(page.mode, EditMode::Viewing);
        assert!(!page.confirm_discard);
    }

    #[test]
    fn changed_draft_needs_confirmation() {
        let mut page = editing_page();
        page.draft.description = "engines".into();

        page.request_exit();
        assert_eq!(page.mode, EditMode::Editing);
        assert!(page.confirm_discard);

        page.cancel_exit();
        assert_eq!(page.mode, EditMode::Editing);
        assert_eq!(page.draft.description, "engines");

        page.request_exit();
        page.confirm_exit();
        assert_eq!(page.mode, EditMode::Viewing);
        assert_eq!(page.draft, SettingsDraft::default());
    }

    #[test]
    fn pending_avatar_counts_as_a_change() {
        let mut page = editing_page();
        page.draft.avatar = Some(vec![1, 2, 3]);
        page.request_exit();
        assert!(page.confirm_discard);
    }

    #[tokio::test]
    async fn unchanged_save_makes_no_calls_and_returns_to_viewing() {
        let api = MemoryApi::new();
        let mut page = editing_page();
        assert!(page.begin_save());

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert_eq!(outcome, SaveOutcome::NoChanges);
        assert_eq!(outcome.notice(), None);
        assert!(api.calls().is_empty());
        assert_eq!(page.mode, EditMode::Viewing);
        assert!(!page.saving);
    }

    #[tokio::test]
    async fn empty_username_is_rejected_without_calls() {
        let api = MemoryApi::new();
        let mut page = editing_page();
        page.draft.username = String::new();
        page.draft.description = "x".into();

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert!(outcome.notice().is_some_and(|n| n.is_error()));
        assert_eq!(page.mode, EditMode::Editing);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn text_change_sends_settings_only() {
        let api = MemoryApi::new()
            .with_current_user(Some(ada()))
            .with_profile(ada_profile());
        let mut page = editing_page();
        page.draft.username = "countess".into();

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;

        assert_eq!(
            outcome,
            SaveOutcome::Finished {
                settings: true,
                avatar: None
            }
        );
        assert!(outcome.needs_refetch());
        assert_eq!(outcome.notice(), Some(Notice::success("Profile updated")));
        assert_eq!(
            api.calls(),
            vec![ApiCall::UpdateSettings(SettingsUpdate {
                username: "countess".into(),
                description: "analyst".into(),
            })]
        );

        page.apply_save(&outcome);
        assert_eq!(page.mode, EditMode::Viewing);
        assert_eq!(
            fetch_profile(&api, "1").await.profile().map(|p| p.username.clone()),
            Some("countess".to_string())
        );
    }

    #[tokio::test]
    async fn avatar_only_change_still_sends_the_settings() {
        let api = MemoryApi::new();
        let mut page = editing_page();
        page.draft.avatar = Some(vec![0u8; 64]);

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;

        assert_eq!(
            api.calls(),
            vec![
                ApiCall::UpdateSettings(SettingsUpdate {
                    username: "ada".into(),
                    description: "analyst".into(),
                }),
                ApiCall::UpdateAvatar { bytes: 64 },
            ]
        );
        assert!(outcome.closes_editor());
    }

    #[tokio::test]
    async fn failed_avatar_alone_does_not_keep_editing() {
        let api = MemoryApi::new().with_avatar_result(false);
        let mut page = editing_page();
        page.draft.avatar = Some(vec![0u8; 16]);

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert_eq!(
            outcome,
            SaveOutcome::Finished {
                settings: true,
                avatar: Some(false)
            }
        );
        assert_eq!(page.mode, EditMode::Viewing);
        assert!(outcome.notice().is_some_and(|n| n.is_error()));
    }

    #[tokio::test]
    async fn failed_settings_keep_editing_even_if_avatar_succeeds() {
        let api = MemoryApi::new().with_settings_result(false);
        let mut page = editing_page();
        page.draft.description = "engines".into();
        page.draft.avatar = Some(vec![7; 8]);

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert_eq!(
            outcome,
            SaveOutcome::Finished {
                settings: false,
                avatar: Some(true)
            }
        );
        assert!(outcome.needs_refetch());
        assert!(outcome.notice().is_some_and(|n| n.is_error()));
        assert_eq!(page.mode, EditMode::Editing);
        assert_eq!(page.draft.avatar, None);
        assert_eq!(page.draft.description, "engines");
    }

    #[tokio::test]
    async fn failed_avatar_does_not_block_settings_success() {
        let api = MemoryApi::new().with_avatar_result(false);
        let mut page = editing_page();
        page.draft.username = "countess".into();
        page.draft.avatar = Some(vec![7; 8]);

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert_eq!(page.mode, EditMode::Viewing);
        assert_eq!(
            outcome.notice(),
            Some(Notice::error("Profile updated, but the avatar could not be uploaded"))
        );
    }

    #[tokio::test]
    async fn network_failure_keeps_editing() {
        let api = MemoryApi::new();
        api.set_offline(true);
        let mut page = editing_page();
        page.draft.username = "countess".into();

        let outcome = save_settings(&api, &ada_profile(), &page.draft).await;
        page.apply_save(&outcome);

        assert_eq!(page.mode, EditMode::Editing);
        assert!(!outcome.needs_refetch());
        assert_eq!(outcome.notice(), Some(Notice::error("Could not update your profile")));
    }

    #[test]
    fn losing_the_profile_leaves_edit_mode() {
        let mut page = editing_page();
        page.apply_load(ProfileLoad::NotFound);
        assert_eq!(page.mode, EditMode::Viewing);
        assert!(!page.is_owner(Some(&ada())));
    }

    #[test]
    fn save_cannot_start_twice() {
        let mut page = editing_page();
        assert!(page.begin_save());
        assert!(!page.begin_save());
    }
}
