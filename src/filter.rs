use crate::content::{Project, ProjectCategory};

/// Active selection of the project filter bar. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Buttons of the filter bar, left to right.
    pub const OPTIONS: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Automation),
        ProjectFilter::Only(ProjectCategory::Testing),
        ProjectFilter::Only(ProjectCategory::Tool),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }

    pub fn apply(self, projects: &[Project]) -> Vec<Project> {
        projects.iter().filter(|p| self.matches(p)).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn ids(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_full_list() {
        let shown = ProjectFilter::All.apply(PROJECTS);
        assert_eq!(shown.len(), 6);
        assert_eq!(ids(&shown), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_exact_category_match_keeps_order() {
        let testing = ProjectFilter::Only(ProjectCategory::Testing).apply(PROJECTS);
        assert_eq!(ids(&testing), vec![2, 4, 6]);
        let automation = ProjectFilter::Only(ProjectCategory::Automation).apply(PROJECTS);
        assert_eq!(ids(&automation), vec![1, 3]);
        let tool = ProjectFilter::Only(ProjectCategory::Tool).apply(PROJECTS);
        assert_eq!(ids(&tool), vec![5]);
    }

    #[test]
    fn test_category_without_projects_is_empty() {
        let automation_only = ProjectFilter::Only(ProjectCategory::Automation).apply(PROJECTS);
        let shown = ProjectFilter::Only(ProjectCategory::Tool).apply(&automation_only);
        assert!(shown.is_empty());
    }

    #[test]
    fn test_default_is_sentinel() {
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
        assert_eq!(ProjectFilter::OPTIONS[0].label(), "All");
        assert_eq!(ProjectFilter::OPTIONS[3].label(), "Tool");
    }
}
