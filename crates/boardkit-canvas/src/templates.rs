//! # Board Template Module
//!
//! Ready-made boards used to pre-populate an empty canvas.
//!
//! Templates are plain shape-command lists, so pre-populating a board goes
//! through the same materializer as assistant output: coordinates are relative
//! to the viewport centre and spaced by the materializer.
//!
//! Features:
//! - Built-in templates (flowchart, kanban, mind map, retrospective, wireframe, SWOT)
//! - Categories, tags and text search
//! - Custom templates added at runtime

use boardkit_core::ShapeCommand;
use serde::{Deserialize, Serialize};

use crate::materializer::{Materializer, Offset};
use crate::surface::DrawingSurface;

/// Template categories for organizing boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Idea generation and clustering
    Brainstorming,
    /// Project and task planning
    Planning,
    /// Process and structure diagrams
    Diagramming,
    /// UI and product design
    Design,
    /// Team retrospectives
    Retrospective,
}

impl TemplateCategory {
    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Brainstorming => "brainstorming",
            TemplateCategory::Planning => "planning",
            TemplateCategory::Diagramming => "diagramming",
            TemplateCategory::Design => "design",
            TemplateCategory::Retrospective => "retrospective",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brainstorming" => Some(TemplateCategory::Brainstorming),
            "planning" => Some(TemplateCategory::Planning),
            "diagramming" => Some(TemplateCategory::Diagramming),
            "design" => Some(TemplateCategory::Design),
            "retrospective" => Some(TemplateCategory::Retrospective),
            _ => None,
        }
    }
}

/// A named list of shape commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTemplate {
    /// Unique template identifier
    pub id: String,
    /// Template name
    pub name: String,
    /// Template description
    pub description: String,
    /// Category for organization
    pub category: TemplateCategory,
    /// Template tags for search
    pub tags: Vec<String>,
    /// Shapes placed when the template is applied
    pub shapes: Vec<ShapeCommand>,
}

impl BoardTemplate {
    /// Create new board template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: TemplateCategory,
        shapes: Vec<ShapeCommand>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            tags: Vec::new(),
            shapes,
        }
    }

    /// Add tag to template
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remove tag from template
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    fn with_tags(mut self, tags: &[&str]) -> Self {
        for tag in tags {
            self.add_tag(*tag);
        }
        self
    }

    /// Case-insensitive match against name, description and tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    /// Pre-populates `surface` with this template's shapes.
    pub fn apply<S>(&self, materializer: &mut Materializer, surface: &mut S, offset: Offset) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        tracing::debug!("Applying template '{}' ({} shapes)", self.id, self.shapes.len());
        materializer.materialize(surface, &self.shapes, offset)
    }
}

/// Collection of board templates
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Vec<BoardTemplate>,
}

impl TemplateLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding every built-in template
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                flowchart(),
                kanban(),
                mind_map(),
                retrospective(),
                wireframe(),
                swot(),
            ],
        }
    }

    /// Add a template, replacing any template with the same id
    pub fn add(&mut self, template: BoardTemplate) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Remove a template by id
    pub fn remove(&mut self, id: &str) -> Option<BoardTemplate> {
        let pos = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(pos))
    }

    /// Get template by id
    pub fn get(&self, id: &str) -> Option<&BoardTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates in a category
    pub fn by_category(&self, category: TemplateCategory) -> Vec<&BoardTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Search templates by name, description or tag
    pub fn search(&self, query: &str) -> Vec<&BoardTemplate> {
        self.templates.iter().filter(|t| t.matches(query)).collect()
    }

    /// Ids of all templates, in library order
    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoardTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn flowchart() -> BoardTemplate {
    let shapes = vec![
        ShapeCommand::ellipse(-50.0, -160.0, 200.0, 70.0).with_color("green"),
        ShapeCommand::text(-15.0, -150.0, "Start"),
        ShapeCommand::arrow(0.0, -120.0, 0.0, 60.0),
        ShapeCommand::rectangle(-50.0, -80.0, 200.0, 80.0).with_color("blue"),
        ShapeCommand::text(-25.0, -70.0, "Process"),
        ShapeCommand::arrow(0.0, -35.0, 0.0, 60.0),
        ShapeCommand::rectangle(-50.0, 5.0, 200.0, 80.0).with_color("orange"),
        ShapeCommand::text(-25.0, 15.0, "Decision?"),
        ShapeCommand::arrow(50.0, 25.0, 120.0, 0.0).with_color("grey"),
        ShapeCommand::text(70.0, 10.0, "no"),
        ShapeCommand::arrow(0.0, 50.0, 0.0, 60.0).with_color("grey"),
        ShapeCommand::text(5.0, 60.0, "yes"),
        ShapeCommand::ellipse(-50.0, 90.0, 200.0, 70.0).with_color("red"),
        ShapeCommand::text(-10.0, 100.0, "End"),
    ];
    BoardTemplate::new(
        "flowchart",
        "Flowchart",
        "Start, process, decision and end steps joined by arrows",
        TemplateCategory::Diagramming,
        shapes,
    )
    .with_tags(&["process", "diagram", "workflow"])
}

fn kanban() -> BoardTemplate {
    let mut shapes = Vec::new();
    let columns = [("To do", "grey"), ("In progress", "blue"), ("Done", "green")];
    for (i, (title, color)) in columns.iter().enumerate() {
        let x = -150.0 + 100.0 * i as f64;
        shapes.push(ShapeCommand::rectangle(x, -120.0, 180.0, 480.0).with_color(*color));
        shapes.push(ShapeCommand::text(x + 10.0, -110.0, *title).with_color(*color));
        for card in 0..2 {
            let y = -85.0 + 45.0 * card as f64;
            shapes.push(ShapeCommand::rectangle(x + 5.0, y, 160.0, 70.0).with_color("yellow"));
        }
    }
    BoardTemplate::new(
        "kanban",
        "Kanban Board",
        "Three workflow columns with starter cards",
        TemplateCategory::Planning,
        shapes,
    )
    .with_tags(&["tasks", "agile", "columns"])
}

fn mind_map() -> BoardTemplate {
    let mut shapes = vec![
        ShapeCommand::ellipse(-40.0, -25.0, 160.0, 100.0).with_color("violet"),
        ShapeCommand::text(-25.0, -10.0, "Central idea"),
    ];
    let branches = [
        (-160.0, -110.0, "light-blue"),
        (110.0, -110.0, "light-green"),
        (-160.0, 80.0, "orange"),
        (110.0, 80.0, "light-red"),
    ];
    for (i, (x, y, color)) in branches.iter().enumerate() {
        let dx = if *x < 0.0 { -80.0 } else { 80.0 };
        let dy = if *y < 0.0 { -60.0 } else { 60.0 };
        shapes.push(ShapeCommand::line(0.0, 0.0, dx, dy).with_color("grey"));
        shapes.push(ShapeCommand::ellipse(*x, *y, 120.0, 70.0).with_color(*color));
        shapes.push(ShapeCommand::text(*x + 10.0, *y + 10.0, format!("Idea {}", i + 1)));
    }
    BoardTemplate::new(
        "mind-map",
        "Mind Map",
        "A central idea with four branches to expand",
        TemplateCategory::Brainstorming,
        shapes,
    )
    .with_tags(&["ideas", "brainstorm"])
}

fn retrospective() -> BoardTemplate {
    let mut shapes = Vec::new();
    let columns = [
        ("Went well", "green"),
        ("To improve", "red"),
        ("Action items", "blue"),
    ];
    for (i, (title, color)) in columns.iter().enumerate() {
        let x = -150.0 + 100.0 * i as f64;
        shapes.push(ShapeCommand::rectangle(x, -100.0, 180.0, 400.0).with_color(*color));
        shapes.push(ShapeCommand::text(x + 10.0, -90.0, *title).with_color(*color));
    }
    BoardTemplate::new(
        "retrospective",
        "Sprint Retrospective",
        "Went well, to improve and action item columns",
        TemplateCategory::Retrospective,
        shapes,
    )
    .with_tags(&["retro", "agile", "team"])
}

fn wireframe() -> BoardTemplate {
    let shapes = vec![
        ShapeCommand::rectangle(-200.0, -130.0, 800.0, 520.0).with_color("grey"),
        ShapeCommand::rectangle(-200.0, -130.0, 800.0, 60.0).with_color("grey"),
        ShapeCommand::text(-190.0, -122.0, "Logo"),
        ShapeCommand::rectangle(-200.0, -100.0, 160.0, 460.0).with_color("light-blue"),
        ShapeCommand::text(-190.0, -90.0, "Navigation"),
        ShapeCommand::rectangle(-110.0, -90.0, 600.0, 300.0).with_color("light-violet"),
        ShapeCommand::line(-110.0, -90.0, 600.0, 300.0).with_color("light-violet"),
        ShapeCommand::line(-110.0, 60.0, 600.0, -300.0).with_color("light-violet"),
        ShapeCommand::text(-100.0, 70.0, "Headline"),
        ShapeCommand::rectangle(-100.0, 110.0, 160.0, 50.0).with_color("blue"),
        ShapeCommand::text(-90.0, 115.0, "Call to action").with_color("blue"),
    ];
    BoardTemplate::new(
        "wireframe",
        "Landing Page Wireframe",
        "Header, navigation, hero image and call-to-action blocks",
        TemplateCategory::Design,
        shapes,
    )
    .with_tags(&["ui", "website", "layout"])
}

fn swot() -> BoardTemplate {
    let quadrants = [
        (-130.0, -110.0, "Strengths", "green"),
        (0.0, -110.0, "Weaknesses", "orange"),
        (-130.0, 20.0, "Opportunities", "blue"),
        (0.0, 20.0, "Threats", "red"),
    ];
    let mut shapes = Vec::new();
    for (x, y, title, color) in quadrants {
        shapes.push(ShapeCommand::rectangle(x, y, 250.0, 250.0).with_color(color));
        shapes.push(ShapeCommand::text(x + 10.0, y + 10.0, title).with_color(color));
    }
    BoardTemplate::new(
        "swot",
        "SWOT Analysis",
        "Strengths, weaknesses, opportunities and threats",
        TemplateCategory::Planning,
        shapes,
    )
    .with_tags(&["strategy", "analysis"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            TemplateCategory::Brainstorming,
            TemplateCategory::Planning,
            TemplateCategory::Diagramming,
            TemplateCategory::Design,
            TemplateCategory::Retrospective,
        ] {
            assert_eq!(TemplateCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(TemplateCategory::parse(" Planning "), Some(TemplateCategory::Planning));
        assert_eq!(TemplateCategory::parse("cooking"), None);
    }

    #[test]
    fn test_tags() {
        let mut template = BoardTemplate::new("t", "T", "", TemplateCategory::Design, Vec::new());
        template.add_tag("ui");
        template.add_tag("ui");
        assert_eq!(template.tags, vec!["ui".to_string()]);
        assert!(template.remove_tag("ui"));
        assert!(!template.remove_tag("ui"));
    }

    #[test]
    fn test_builtin_ids_unique_and_non_empty() {
        let library = TemplateLibrary::builtin();
        let mut ids = library.ids();
        assert_eq!(
            ids,
            vec!["flowchart", "kanban", "mind-map", "retrospective", "wireframe", "swot"]
        );
        ids.dedup();
        assert_eq!(ids.len(), library.len());
        assert!(library.iter().all(|t| !t.shapes.is_empty()));
    }

    #[test]
    fn test_add_replaces_and_remove() {
        let mut library = TemplateLibrary::builtin();
        let count = library.len();
        library.add(BoardTemplate::new(
            "swot",
            "Custom SWOT",
            "",
            TemplateCategory::Planning,
            Vec::new(),
        ));
        assert_eq!(library.len(), count);
        assert_eq!(library.get("swot").unwrap().name, "Custom SWOT");

        assert!(library.remove("swot").is_some());
        assert!(library.get("swot").is_none());
        assert!(library.remove("swot").is_none());
    }
}
