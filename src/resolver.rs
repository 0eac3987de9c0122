//! # Dependency Resolver
//!
//! Turns the dependency slots of a checkout into symlinks to the sibling
//! checkouts in the workspace.
//!
//! ## Resolution pass
//!
//! Every checkout goes through the same sequence:
//!
//! 1.  **Cleanup**: every symlink in the dependency area (the framework slot
//!     and every module slot) is removed, so nothing points at a stale
//!     location.
//! 2.  **Package step** (optional): the package manager runs in the checkout
//!     and reinstalls placeholder directories for the slots it manages.
//! 3.  **Link**: the framework slot, if it is a real directory, becomes a
//!     link to the framework sources. Each module slot that is a real
//!     directory becomes a link to that module's checkout. Modules that are
//!     not checked out yet are cloned and fully resolved first, without a
//!     package step of their own. Slots whose links pointed at their own
//!     workspace checkout before cleanup are linked again. A link that
//!     pointed anywhere else is not recreated.
//!
//! A slot that is already a symlink during the link phase was created by
//! this run and is left alone. Dangling links are dropped, not recreated.
//! Together this makes a second run converge on the same links as the first.
//!
//! ## Recursion
//!
//! Resolving a freshly cloned module can clone further modules. The names
//! of modules being resolved are kept on a stack, and re-entering one of
//! them fails with `DependencyCycle` instead of recursing without bound.
//! Since a module is cloned before its slots are linked, a module on the
//! stack always has a checkout and is never recursed into again; the stack
//! is a backstop for that ordering, not a path normal runs take.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::filesystem::{self, SlotState};
use crate::locator::Locator;
use crate::output::Reporter;
use crate::package::PackageManager;
use crate::repository::{Checkout, RepositoryFetcher};
use crate::slot::ModuleName;
use crate::workspace::Workspace;

/// Names of the modules currently being resolved, outermost first.
///
/// `link_module` clones before it recurses, so a module already on the stack
/// always has a checkout and is never re-entered. The guard is defensive.
#[derive(Debug, Default)]
pub struct ResolutionStack {
    names: Vec<ModuleName>,
}

impl ResolutionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `name`, failing if it is already being resolved.
    pub fn enter(&mut self, name: &ModuleName) -> Result<()> {
        if let Some(start) = self.names.iter().position(|n| n == name) {
            let cycle = self.names[start..]
                .iter()
                .chain(std::iter::once(name))
                .map(ModuleName::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::DependencyCycle { cycle });
        }
        self.names.push(name.clone());
        Ok(())
    }

    pub fn exit(&mut self) {
        self.names.pop();
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }
}

/// Slots whose live symlinks were removed by a cleanup pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovedLinks {
    pub framework: bool,
    pub modules: Vec<ModuleName>,
}

/// Links the dependency slots of workspace checkouts.
pub struct Resolver<'a> {
    workspace: &'a Workspace,
    fetcher: &'a RepositoryFetcher,
    package_manager: Option<&'a dyn PackageManager>,
    reporter: &'a Reporter,
    stack: ResolutionStack,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver. Without a package manager the package step is
    /// skipped everywhere.
    pub fn new(
        workspace: &'a Workspace,
        fetcher: &'a RepositoryFetcher,
        package_manager: Option<&'a dyn PackageManager>,
        reporter: &'a Reporter,
    ) -> Self {
        Self {
            workspace,
            fetcher,
            package_manager,
            reporter,
            stack: ResolutionStack::new(),
        }
    }

    /// Makes sure `module` is checked out, then runs a resolution pass on it.
    ///
    /// The locator is taken from `locator`, falling back to the module
    /// registry; it is only needed when the checkout is missing.
    pub fn link_module(
        &mut self,
        module: &ModuleName,
        locator: Option<&Locator>,
        run_package_step: bool,
    ) -> Result<()> {
        self.stack.enter(module)?;
        let result = self.link_module_inner(module, locator, run_package_step);
        self.stack.exit();
        result
    }

    fn link_module_inner(
        &mut self,
        module: &ModuleName,
        locator: Option<&Locator>,
        run_package_step: bool,
    ) -> Result<()> {
        let path = self.workspace.module_path(module);
        if !path.exists() {
            let locator = locator
                .or_else(|| self.workspace.config().modules.locator(module))
                .ok_or_else(|| Error::UnresolvableDependency {
                    module: module.to_string(),
                })?;
            self.clone_checkout(&format!("module repo '{}'", module), &path, locator)?;
        }

        self.resolve(
            &format!("module '{}'", module),
            &path,
            Path::new(""),
            run_package_step,
        )
    }

    /// Makes sure an app is checked out, then runs a resolution pass on it
    /// with the package step.
    pub fn link_app(&mut self, app: &AppConfig, locator: Option<&Locator>) -> Result<()> {
        let path = self.workspace.app_path(app);
        if !path.exists() {
            let locator = locator
                .or(app.repo.as_ref())
                .ok_or_else(|| Error::UnresolvableDependency {
                    module: app.name.clone(),
                })?;
            self.clone_checkout(&app.name, &path, locator)?;
        }

        self.resolve(&app.name, &path, &app.package_root, true)
    }

    fn clone_checkout(&self, what: &str, path: &Path, locator: &Locator) -> Result<()> {
        let shown = self.fetcher.transform().apply(locator);
        self.reporter
            .step(&format!("cloning {} from '{}'...", what, shown));
        match self.fetcher.ensure_checkout(path, locator) {
            Ok(Checkout::Cloned) | Ok(Checkout::Existing) => {
                self.reporter.done();
                Ok(())
            }
            Err(e) => {
                self.reporter.error(&format!("error cloning repo: {}", shown));
                Err(e)
            }
        }
    }

    /// Runs a full resolution pass (cleanup, package step, link) on the
    /// checkout at `checkout`, whose `vendor/` lives under `package_root`.
    pub fn resolve(
        &mut self,
        label: &str,
        checkout: &Path,
        package_root: &Path,
        run_package_step: bool,
    ) -> Result<()> {
        let area = self.workspace.dependency_area(checkout, package_root);
        log::debug!(
            "resolving {} (depth {}) in {}",
            label,
            self.stack.depth(),
            area.display()
        );

        self.reporter
            .step(&format!("cleaning up {} vendor directory...", label));
        let removed = self.cleanup(&area)?;
        self.reporter.done();

        if run_package_step {
            if let Some(manager) = self.package_manager {
                self.reporter.step(&format!(
                    "running '{}' for {}...",
                    manager.describe(),
                    label
                ));
                manager.install(checkout)?;
                self.reporter.done();
            }
        }

        self.reporter.step(&format!(
            "linking framework and modules to {} vendor dir...",
            label
        ));
        self.link(&area, &removed)?;
        self.reporter.done();
        Ok(())
    }

    /// Removes every symlinked slot in `area`. Real directories are kept.
    ///
    /// Returns the slots whose links pointed at their own, existing checkout
    /// in this workspace. Links to anywhere else are removed and forgotten.
    pub fn cleanup(&self, area: &Path) -> Result<RemovedLinks> {
        let mut removed = RemovedLinks::default();

        let framework_slot = self.workspace.framework_slot(area);
        if filesystem::is_symlink(&framework_slot) {
            removed.framework = links_to(&framework_slot, &self.workspace.framework_path());
            self.remove_link(&framework_slot)?;
        }

        for module in self.candidates(area) {
            let slot = self.workspace.module_slot(area, &module);
            if filesystem::is_symlink(&slot) {
                let ours = links_to(&slot, &self.workspace.module_path(&module));
                self.remove_link(&slot)?;
                if ours {
                    removed.modules.push(module);
                }
            }
        }
        Ok(removed)
    }

    fn remove_link(&self, slot: &Path) -> Result<()> {
        self.reporter
            .notice(&format!("Removing symlink {}.", slot.display()));
        filesystem::remove_slot(slot)
    }

    /// Converts every placeholder slot in `area` into a symlink, cloning and
    /// resolving missing modules on the way. Slots listed in `relink` are
    /// linked again if nothing took their place since cleanup; relinking
    /// never clones.
    pub fn link(&mut self, area: &Path, relink: &RemovedLinks) -> Result<()> {
        let framework_slot = self.workspace.framework_slot(area);
        if self.needs_link(&framework_slot, relink.framework) {
            let target = self.workspace.framework_path();
            self.replace_placeholder(&framework_slot, &target)?;
        }

        let mut modules = self.candidates(area);
        for module in &relink.modules {
            if !modules.contains(module) {
                modules.push(module.clone());
            }
        }
        modules.sort();

        for module in modules {
            let slot = self.workspace.module_slot(area, &module);
            let placeholder = filesystem::is_real_dir(&slot);
            if !self.needs_link(&slot, relink.modules.contains(&module)) {
                continue;
            }

            let target = self.workspace.module_path(&module);
            if !target.exists() {
                if !placeholder {
                    // relinking never fetches
                    log::debug!("not relinking {}: {} is gone", slot.display(), target.display());
                    continue;
                }
                // placeholder stays in place if the sibling cannot be fetched
                self.link_module(&module, None, false)?;
            }
            self.replace_placeholder(&slot, &target)?;
        }
        Ok(())
    }

    /// A slot is linked if it is a placeholder directory, or if its link was
    /// removed by cleanup and the slot is still empty.
    fn needs_link(&self, slot: &Path, was_linked: bool) -> bool {
        match filesystem::slot_state(slot) {
            SlotState::Placeholder => true,
            SlotState::Absent => was_linked,
            _ => false,
        }
    }

    fn replace_placeholder(&self, slot: &Path, target: &Path) -> Result<()> {
        if filesystem::is_real_dir(slot) {
            self.reporter
                .notice(&format!("Removing dir {}.", slot.display()));
            filesystem::remove_slot(slot)?;
        }
        self.reporter
            .notice(&format!("Creating symlink for {}.", slot.display()));
        filesystem::replace_with_symlink(slot, target)?;
        log::info!("linked {} -> {}", slot.display(), target.display());
        Ok(())
    }

    /// Slot candidates in `area`, minus reserved and excluded names.
    fn candidates(&self, area: &Path) -> Vec<ModuleName> {
        let naming = self.workspace.naming();
        filesystem::list_slot_candidates(area, naming)
            .into_iter()
            .filter(|module| {
                let excluded = naming.is_excluded(module);
                if excluded {
                    log::debug!("skipping excluded slot {}", module);
                }
                !excluded
            })
            .collect()
    }
}

/// True if `slot` is a symlink to `target` and `target` is a directory.
fn links_to(slot: &Path, target: &Path) -> bool {
    target.is_dir() && std::fs::read_link(slot).is_ok_and(|t| t == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::locator::LocatorTransform;
    use crate::repository::GitOperations;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn test_stack_detects_reentry() {
        let a = ModuleName::new("auth").unwrap();
        let b = ModuleName::new("users").unwrap();
        let mut stack = ResolutionStack::new();
        stack.enter(&a).unwrap();
        stack.enter(&b).unwrap();

        match stack.enter(&a) {
            Err(Error::DependencyCycle { cycle }) => assert_eq!(cycle, "auth -> users -> auth"),
            other => panic!("expected cycle, got {:?}", other),
        }
        assert_eq!(stack.depth(), 2);

        stack.exit();
        stack.exit();
        stack.enter(&a).unwrap();
    }

    /// Clones by creating the target with the listed slot placeholders.
    struct FakeGit {
        slots: Vec<(String, Vec<&'static str>)>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl GitOperations for FakeGit {
        fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
            self.calls.borrow_mut().push(url.to_string());
            let area = target_dir.join("vendor/ejsoft");
            fs::create_dir_all(&area)?;
            if let Some((_, slots)) = self.slots.iter().find(|(u, _)| u == url) {
                for slot in slots {
                    fs::create_dir_all(area.join(slot))?;
                }
            }
            Ok(())
        }
    }

    struct CountingPackageManager {
        runs: RefCell<Vec<std::path::PathBuf>>,
    }

    impl PackageManager for CountingPackageManager {
        fn install(&self, checkout: &Path) -> Result<()> {
            self.runs.borrow_mut().push(checkout.to_path_buf());
            Ok(())
        }

        fn describe(&self) -> String {
            "fake install".to_string()
        }
    }

    fn setup(yaml: &str) -> (TempDir, Workspace) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::create_dir_all(temp.path().join("project/modules")).unwrap();
        let ws = Workspace::open(temp.path(), config::parse(yaml).unwrap()).unwrap();
        (temp, ws)
    }

    fn fetcher(slots: Vec<(String, Vec<&'static str>)>) -> (RepositoryFetcher, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let git = FakeGit {
            slots,
            calls: Rc::clone(&calls),
        };
        (
            RepositoryFetcher::with_operations(Box::new(git), LocatorTransform::identity()),
            calls,
        )
    }

    #[cfg(unix)]
    #[test]
    fn test_cleanup_then_link_framework_and_module() {
        let (_temp, ws) = setup("modules:\n  auth: https://example.com/auth.git\n");
        let blog = ModuleName::new("blog").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(area.join("core/src")).unwrap();
        fs::create_dir_all(area.join("ease-auth")).unwrap();

        let (fetcher, calls) = fetcher(vec![]);
        let reporter = Reporter::capturing();
        let manager = CountingPackageManager {
            runs: RefCell::new(Vec::new()),
        };
        let mut resolver = Resolver::new(&ws, &fetcher, Some(&manager), &reporter);
        resolver.link_module(&blog, None, true).unwrap();

        let auth = ModuleName::new("auth").unwrap();
        assert_eq!(fs::read_link(area.join("core")).unwrap(), ws.framework_path());
        assert_eq!(fs::read_link(area.join("ease-auth")).unwrap(), ws.module_path(&auth));
        assert_eq!(*calls.borrow(), vec!["https://example.com/auth.git"]);
        // only the top-level module runs the package step
        assert_eq!(*manager.runs.borrow(), vec![ws.module_path(&blog)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_notices_precede_destructive_actions() {
        let (_temp, ws) = setup("");
        let site = ws.site().unwrap().clone();
        let site_path = ws.app_path(&site);
        let area = ws.dependency_area(&site_path, &site.package_root);
        fs::create_dir_all(area.join("core")).unwrap();

        let (fetcher, _) = fetcher(vec![]);
        let reporter = Reporter::capturing();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        resolver.link_app(&site, None).unwrap();

        let core = area.join("core");
        let lines = reporter.lines();
        let removing = lines
            .iter()
            .position(|l| *l == format!("Removing dir {}.", core.display()))
            .unwrap();
        let creating = lines
            .iter()
            .position(|l| *l == format!("Creating symlink for {}.", core.display()))
            .unwrap();
        assert!(removing < creating);

        // second run removes the link it made and creates it afresh
        let reporter = Reporter::capturing();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        resolver.link_app(&site, None).unwrap();
        let lines = reporter.lines();
        let removing = lines
            .iter()
            .position(|l| *l == format!("Removing symlink {}.", core.display()))
            .unwrap();
        let creating = lines
            .iter()
            .position(|l| *l == format!("Creating symlink for {}.", core.display()))
            .unwrap();
        assert!(removing < creating);
        assert_eq!(fs::read_link(&core).unwrap(), ws.framework_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_second_pass_converges() {
        let (_temp, ws) = setup("modules:\n  auth: https://example.com/auth.git\n");
        let blog = ModuleName::new("blog").unwrap();
        let auth = ModuleName::new("auth").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(area.join("core")).unwrap();
        fs::create_dir_all(area.join("ease-auth")).unwrap();
        fs::create_dir_all(area.join("yii2")).unwrap();

        let (fetcher, calls) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let snapshot = |area: &Path| {
            let mut entries: Vec<_> = fs::read_dir(area)
                .unwrap()
                .map(|e| {
                    let path = e.unwrap().path();
                    (path.clone(), filesystem::slot_state(&path))
                })
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            entries
        };

        Resolver::new(&ws, &fetcher, None, &reporter)
            .link_module(&blog, None, false)
            .unwrap();
        let first = snapshot(&area);
        Resolver::new(&ws, &fetcher, None, &reporter)
            .link_module(&blog, None, false)
            .unwrap();
        let second = snapshot(&area);

        assert_eq!(first, second);
        assert_eq!(fs::read_link(area.join("ease-auth")).unwrap(), ws.module_path(&auth));
        assert_eq!(filesystem::slot_state(&area.join("yii2")), SlotState::Placeholder);
        // auth was cloned once, by the first pass
        assert_eq!(calls.borrow().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unregistered_module_is_unresolvable() {
        let (_temp, ws) = setup("");
        let blog = ModuleName::new("blog").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(area.join("ease-billing")).unwrap();

        let (fetcher, calls) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        let err = resolver.link_module(&blog, None, false).unwrap_err();

        match err {
            Error::UnresolvableDependency { module } => assert_eq!(module, "billing"),
            other => panic!("expected UnresolvableDependency, got {:?}", other),
        }
        assert!(calls.borrow().is_empty());
        assert!(filesystem::is_real_dir(&area.join("ease-billing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_excluded_and_reserved_slots_untouched() {
        let (_temp, ws) = setup("exclude: [legacy]\n");
        let blog = ModuleName::new("blog").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(area.join("ease-legacy")).unwrap();
        fs::create_dir_all(area.join("ease-composer")).unwrap();

        let (fetcher, calls) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        resolver.link_module(&blog, None, false).unwrap();

        assert!(calls.borrow().is_empty());
        assert!(filesystem::is_real_dir(&area.join("ease-legacy")));
        assert!(filesystem::is_real_dir(&area.join("ease-composer")));
    }

    #[cfg(unix)]
    #[test]
    fn test_recursive_fetch_links_transitive_modules() {
        let yaml = r#"
modules:
  auth: https://example.com/auth.git
  users: https://example.com/users.git
"#;
        let (_temp, ws) = setup(yaml);
        let blog = ModuleName::new("blog").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(area.join("ease-auth")).unwrap();

        // auth depends on users, and users points back at auth
        let (fetcher, calls) = fetcher(vec![
            ("https://example.com/auth.git".to_string(), vec!["ease-users", "core"]),
            ("https://example.com/users.git".to_string(), vec!["ease-auth"]),
        ]);
        let reporter = Reporter::silent();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        resolver.link_module(&blog, None, false).unwrap();

        let auth = ModuleName::new("auth").unwrap();
        let users = ModuleName::new("users").unwrap();
        assert_eq!(
            *calls.borrow(),
            vec!["https://example.com/auth.git", "https://example.com/users.git"]
        );
        let auth_area = ws.dependency_area(&ws.module_path(&auth), Path::new(""));
        let users_area = ws.dependency_area(&ws.module_path(&users), Path::new(""));
        assert_eq!(fs::read_link(area.join("ease-auth")).unwrap(), ws.module_path(&auth));
        assert_eq!(fs::read_link(auth_area.join("ease-users")).unwrap(), ws.module_path(&users));
        assert_eq!(fs::read_link(auth_area.join("core")).unwrap(), ws.framework_path());
        assert_eq!(fs::read_link(users_area.join("ease-auth")).unwrap(), ws.module_path(&auth));
    }

    #[cfg(unix)]
    #[test]
    fn test_cleanup_removes_dangling_links_only() {
        let (temp, ws) = setup("");
        let area = temp.path().join("area");
        fs::create_dir_all(area.join("ease-real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("missing"), area.join("ease-stale")).unwrap();

        let (fetcher, _) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        let removed = resolver.cleanup(&area).unwrap();

        assert_eq!(removed, RemovedLinks::default());
        assert!(!filesystem::is_symlink(&area.join("ease-stale")));
        assert!(filesystem::is_real_dir(&area.join("ease-real")));
    }

    #[cfg(unix)]
    #[test]
    fn test_foreign_links_are_dropped_not_relinked() {
        let (temp, ws) = setup("modules:\n  bar: https://example.com/bar.git\n");
        let blog = ModuleName::new("blog").unwrap();
        let area = ws.dependency_area(&ws.module_path(&blog), Path::new(""));
        fs::create_dir_all(&area).unwrap();
        let elsewhere = temp.path().join("elsewhere");
        for name in ["foo", "bar"] {
            fs::create_dir_all(elsewhere.join(name)).unwrap();
            fs::write(elsewhere.join(name).join("keep.txt"), "mine").unwrap();
        }
        // foo is unregistered, bar is registered but not checked out
        std::os::unix::fs::symlink(elsewhere.join("foo"), area.join("ease-foo")).unwrap();
        std::os::unix::fs::symlink(elsewhere.join("bar"), area.join("ease-bar")).unwrap();

        let (fetcher, calls) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let mut resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        resolver.link_module(&blog, None, false).unwrap();

        assert!(calls.borrow().is_empty());
        assert_eq!(filesystem::slot_state(&area.join("ease-foo")), SlotState::Absent);
        assert_eq!(filesystem::slot_state(&area.join("ease-bar")), SlotState::Absent);
        assert!(elsewhere.join("foo/keep.txt").is_file());
        assert!(elsewhere.join("bar/keep.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_cleanup_only_records_links_to_own_checkout() {
        let (temp, ws) = setup("");
        let auth = ModuleName::new("auth").unwrap();
        fs::create_dir_all(ws.module_path(&auth)).unwrap();
        fs::create_dir_all(temp.path().join("elsewhere/users")).unwrap();
        let area = temp.path().join("area");
        fs::create_dir_all(&area).unwrap();
        std::os::unix::fs::symlink(ws.module_path(&auth), area.join("ease-auth")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("elsewhere/users"), area.join("ease-users"))
            .unwrap();
        std::os::unix::fs::symlink(ws.framework_path(), area.join("core")).unwrap();

        let (fetcher, _) = fetcher(vec![]);
        let reporter = Reporter::silent();
        let resolver = Resolver::new(&ws, &fetcher, None, &reporter);
        let removed = resolver.cleanup(&area).unwrap();

        assert_eq!(
            removed,
            RemovedLinks {
                framework: true,
                modules: vec![auth],
            }
        );
        assert!(!filesystem::is_symlink(&area.join("ease-users")));
    }
}
