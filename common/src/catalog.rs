//! Project catalog behind the gallery and the detail pages.
//!
//! The catalog is a read-only JSON document of project records. The gallery
//! shows the featured projects first, then a grid filtered by category; each
//! card links to a detail page looked up by id.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GALLERY_TOAST_MS;
use crate::error::CatalogError;
use crate::timer::Millis;
use crate::toast::{ToastKind, ToastSlot};

/// Notice shown when a visitor asks for the source of an internal project.
pub const INTERNAL_SOURCE_NOTICE: &str =
    "This project is internal and the source code cannot be shared due to company policy.";

/// Shown when a detail page is requested for an unknown project.
pub const PROJECT_NOT_FOUND: &str = "Project not found.";

/// Number of technology badges shown on a gallery card.
pub const CARD_TECH_LIMIT: usize = 3;

// =============================================================================
// Records
// =============================================================================

/// Project category, as spelled in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Full Stack")]
    FullStack,
    Frontend,
    Backend,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
        }
    }
}

/// One portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Bullet points on the detail page.
    #[serde(default)]
    pub features: Vec<String>,
    /// Repository URL; empty for internal projects.
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Where the "source" button of a project leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceLink<'a> {
    Public(&'a str),
    /// No public repository; show [`INTERNAL_SOURCE_NOTICE`] instead.
    Internal,
}

impl Project {
    /// Technologies to show as badges, plus how many were left out ("+N").
    pub fn tech_preview(
        &self,
        limit: usize,
    ) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }

    pub fn source_link(&self) -> SourceLink<'_> {
        let url = self.github.trim();
        if url.is_empty() { SourceLink::Internal } else { SourceLink::Public(url) }
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Gallery filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(Category::FullStack),
        Self::Only(Category::Frontend),
        Self::Only(Category::Backend),
    ];

    /// Next button to the right, wrapping.
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::FullStack),
            Self::Only(Category::FullStack) => Self::Only(Category::Frontend),
            Self::Only(Category::Frontend) => Self::Only(Category::Backend),
            Self::Only(Category::Backend) => Self::All,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[inline]
    pub fn matches(
        self,
        project: &Project,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, immutable list of projects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        for (i, project) in projects.iter().enumerate() {
            if projects[..i].iter().any(|p| p.id == project.id) {
                return Err(CatalogError::DuplicateId { id: project.id.clone() });
            }
        }
        Ok(Self { projects })
    }

    /// Parse the JSON catalog (an array of project records).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        debug!(count = projects.len(), "catalog loaded");
        Self::new(projects)
    }

    #[inline]
    pub fn len(&self) -> usize { self.projects.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.projects.is_empty() }

    /// Projects matching `filter`, in catalog order.
    pub fn filtered(
        &self,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    /// Projects flagged as featured, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> { self.projects.iter().filter(|p| p.featured) }

    /// Detail page lookup.
    pub fn find(
        &self,
        id: &str,
    ) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_owned() })
    }
}

// =============================================================================
// Gallery and Lightbox State
// =============================================================================

/// Gallery view state.
///
/// `generation` changes with every filter click, even when the same filter
/// is clicked again, so the host can replay the grid entrance animation.
/// `selected` is the keyboard-focused card within the filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    filter: CategoryFilter,
    generation: u32,
    selected: usize,
}

impl Gallery {
    pub const fn new() -> Self {
        Self {
            filter: CategoryFilter::All,
            generation: 0,
            selected: 0,
        }
    }

    /// Apply a filter. Focus returns to the first card.
    pub fn set_filter(
        &mut self,
        filter: CategoryFilter,
    ) {
        self.filter = filter;
        self.selected = 0;
        self.generation = self.generation.wrapping_add(1);
        debug!(filter = filter.label(), generation = self.generation, "gallery filter changed");
    }

    /// Move focus down, wrapping within `len` cards.
    pub const fn select_next(
        &mut self,
        len: usize,
    ) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move focus up, wrapping within `len` cards.
    pub const fn select_prev(
        &mut self,
        len: usize,
    ) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Focused project in `catalog` under the current filter.
    pub fn selected_project<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Option<&'a Project> {
        catalog.filtered(self.filter).nth(self.selected)
    }

    #[inline]
    pub const fn filter(&self) -> CategoryFilter { self.filter }

    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    #[inline]
    pub const fn selected(&self) -> usize { self.selected }
}

/// Photo viewer on the detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: Option<usize>,
}

impl Lightbox {
    /// Viewer over `len` photos, initially closed.
    pub const fn new(len: usize) -> Self { Self { len, index: None } }

    /// Open at photo `index`. Out-of-range indices leave the viewer closed.
    pub const fn open(
        &mut self,
        index: usize,
    ) -> bool {
        if index < self.len {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    pub const fn close(&mut self) { self.index = None; }

    pub const fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
        }
    }

    pub const fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + self.len - 1) % self.len);
        }
    }

    /// Photo on screen, if open.
    #[inline]
    pub const fn index(&self) -> Option<usize> { self.index }
}

/// Per-project detail page with its photo viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    project_id: String,
    lightbox: Lightbox,
}

impl DetailView {
    /// Open the detail page for `id`.
    ///
    /// An unknown id shows [`PROJECT_NOT_FOUND`] as an error toast and
    /// returns `None`.
    pub fn open(
        catalog: &Catalog,
        id: &str,
        toasts: &mut ToastSlot,
        now: Millis,
    ) -> Option<Self> {
        match catalog.find(id) {
            Ok(project) => {
                debug!(id, photos = project.photos.len(), "detail page opened");
                Some(Self {
                    project_id: project.id.clone(),
                    lightbox: Lightbox::new(project.photos.len()),
                })
            }
            Err(e) => {
                warn!(error = %e, "detail page unavailable");
                toasts.show(ToastKind::Error, PROJECT_NOT_FOUND, now, GALLERY_TOAST_MS);
                None
            }
        }
    }

    #[inline]
    pub fn project_id(&self) -> &str { &self.project_id }

    /// The project record, looked up again so a stale view cannot outlive
    /// its catalog entry.
    pub fn project<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<&'a Project, CatalogError> {
        catalog.find(&self.project_id)
    }

    #[inline]
    pub const fn lightbox(&self) -> &Lightbox { &self.lightbox }

    #[inline]
    pub const fn lightbox_mut(&mut self) -> &mut Lightbox { &mut self.lightbox }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "shop",
            "title": "Shop",
            "category": "Full Stack",
            "description": "Online store",
            "technologies": ["Next.js", "Node.js", "PostgreSQL", "Stripe", "Redis"],
            "github": "https://github.com/example/shop",
            "featured": true
        },
        {
            "id": "crm",
            "title": "CRM",
            "category": "Backend",
            "description": "Internal CRM",
            "longDescription": "Customer management for a client",
            "technologies": ["NestJS"],
            "features": ["Lead pipeline", "Invoice export"],
            "github": "   ",
            "photos": ["a.png", "b.png"]
        },
        {
            "id": "landing",
            "title": "Landing",
            "category": "Frontend",
            "description": "Landing page",
            "featured": true
        }
    ]"#;

    fn catalog() -> Catalog { Catalog::from_json(SAMPLE).unwrap() }

    #[test]
    fn test_parse_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        let crm = catalog.find("crm").unwrap();
        assert_eq!(crm.category, Category::Backend);
        assert_eq!(crm.long_description.as_deref(), Some("Customer management for a client"));
        assert!(!crm.featured);
        assert!(catalog.find("shop").unwrap().features.is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let ids = |f: CategoryFilter| catalog.filtered(f).map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids(CategoryFilter::All), ["shop", "crm", "landing"]);
        assert_eq!(ids(CategoryFilter::Only(Category::Frontend)), ["landing"]);
        assert_eq!(ids(CategoryFilter::Only(Category::FullStack)), ["shop"]);
    }

    #[test]
    fn test_featured() {
        let ids: Vec<_> = catalog().featured().map(|p| p.id.clone()).collect();
        assert_eq!(ids, ["shop", "landing"]);
    }

    #[test]
    fn test_missing_id_not_found() {
        let err = catalog().find("nope").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id } if id == "nope"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "a", "title": "A", "category": "Frontend", "description": ""},
            {"id": "a", "title": "B", "category": "Backend", "description": ""}
        ]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"[{"id": "a", "title": "A", "category": "Mobile", "description": ""}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_tech_preview_overflow() {
        let catalog = catalog();
        let (shown, hidden) = catalog.find("shop").unwrap().tech_preview(CARD_TECH_LIMIT);
        assert_eq!(shown, ["Next.js", "Node.js", "PostgreSQL"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = catalog.find("landing").unwrap().tech_preview(CARD_TECH_LIMIT);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_source_link() {
        let catalog = catalog();
        assert_eq!(
            catalog.find("shop").unwrap().source_link(),
            SourceLink::Public("https://github.com/example/shop")
        );
        assert_eq!(catalog.find("crm").unwrap().source_link(), SourceLink::Internal);
    }

    #[test]
    fn test_filter_buttons_cycle() {
        let mut filter = CategoryFilter::default();
        let mut seen = vec![filter];
        for _ in 0..3 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen, CategoryFilter::ALL);
        assert_eq!(filter.next(), CategoryFilter::All);
    }

    #[test]
    fn test_gallery_selection_wraps_and_resets_on_filter() {
        let catalog = catalog();
        let mut gallery = Gallery::new();
        let len = catalog.filtered(gallery.filter()).count();

        gallery.select_prev(len);
        assert_eq!(gallery.selected_project(&catalog).map(|p| p.id.as_str()), Some("landing"));
        gallery.select_next(len);
        assert_eq!(gallery.selected(), 0);
        gallery.select_next(len);
        assert_eq!(gallery.selected_project(&catalog).map(|p| p.id.as_str()), Some("crm"));

        gallery.set_filter(CategoryFilter::Only(Category::Frontend));
        assert_eq!(gallery.selected(), 0);
        assert_eq!(gallery.selected_project(&catalog).map(|p| p.id.as_str()), Some("landing"));
    }

    #[test]
    fn test_selection_in_empty_list() {
        let catalog = Catalog::default();
        let mut gallery = Gallery::new();
        gallery.select_next(0);
        gallery.select_prev(0);
        assert_eq!(gallery.selected(), 0);
        assert!(gallery.selected_project(&catalog).is_none());
    }

    #[test]
    fn test_detail_view_opens_with_photo_count() {
        let catalog = catalog();
        let mut toasts = ToastSlot::new();

        let mut detail = DetailView::open(&catalog, "crm", &mut toasts, 0).unwrap();
        assert!(toasts.current().is_none());
        let project = detail.project(&catalog).unwrap();
        assert_eq!(project.features, ["Lead pipeline", "Invoice export"]);

        assert!(detail.lightbox_mut().open(1));
        detail.lightbox_mut().next();
        assert_eq!(detail.lightbox().index(), Some(0));
        assert!(!detail.lightbox_mut().open(2));
    }

    #[test]
    fn test_detail_view_unknown_id_shows_error_toast() {
        let catalog = catalog();
        let mut toasts = ToastSlot::new();

        assert!(DetailView::open(&catalog, "missing", &mut toasts, 1_000).is_none());
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, PROJECT_NOT_FOUND);
        assert_eq!(toast.duration, GALLERY_TOAST_MS);
    }

    #[test]
    fn test_detail_view_for_removed_project() {
        let mut toasts = ToastSlot::new();
        let detail = DetailView::open(&catalog(), "shop", &mut toasts, 0).unwrap();
        let smaller = Catalog::from_json(r#"[{"id": "crm", "title": "CRM", "category": "Backend", "description": ""}]"#).unwrap();
        assert!(matches!(detail.project(&smaller), Err(CatalogError::NotFound { .. })));
    }

    #[test]
    fn test_gallery_generation_bumps_on_every_click() {
        let mut gallery = Gallery::new();
        gallery.set_filter(CategoryFilter::All);
        gallery.set_filter(CategoryFilter::All);
        assert_eq!(gallery.generation(), 2);
        assert_eq!(gallery.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut lightbox = Lightbox::new(2);
        assert!(!lightbox.open(2));
        assert_eq!(lightbox.index(), None);

        assert!(lightbox.open(1));
        lightbox.next();
        assert_eq!(lightbox.index(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.index(), Some(1));
        lightbox.close();
        assert_eq!(lightbox.index(), None);
    }

    #[test]
    fn test_lightbox_without_photos_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert!(!lightbox.open(0));
        lightbox.next();
        assert_eq!(lightbox.index(), None);
    }
}
