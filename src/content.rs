//! Static display records rendered by the page sections.
//!
//! Everything here is a `'static` literal; nothing is created or mutated at
//! runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Automation,
    Testing,
    Tools,
    Languages,
}

impl SkillCategory {
    /// Render order of the skill cards.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Automation,
        SkillCategory::Testing,
        SkillCategory::Tools,
        SkillCategory::Languages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Automation => "Automation",
            SkillCategory::Testing => "Testing",
            SkillCategory::Tools => "Tools",
            SkillCategory::Languages => "Languages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage in `0..=100`.
    pub proficiency: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Automation,
    Testing,
    Tool,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Automation => "Automation",
            ProjectCategory::Testing => "Testing",
            ProjectCategory::Tool => "Tool",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub repo_link: Option<&'static str>,
    pub highlights: &'static [&'static str],
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

/// A titled blurb in the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
    pub region: &'static str,
}

pub const BRAND: &str = "QA Engineer";

pub const HERO_HIGHLIGHTS: &[&str] = &[
    "Test Automation Frameworks",
    "CI/CD Integration",
    "Performance Testing",
    "Test Strategy",
];

pub const ABOUT_IMAGE: &str = "/images/kawka.jpg";

pub const ABOUT_SUMMARY: &str = "A strong technical background in test automation and quality \
assurance, with hands-on experience in designing and maintaining scalable automation frameworks \
using Playwright with TypeScript and C#/.NET. Proven experience in leading QA teams, defining test \
strategies, and integrating automated tests into CI/CD pipelines (e.g., Jenkins, Azure DevOps). \
Passionate about delivering high-quality software through robust E2E, integration, and API test \
coverage, while continuously improving QA processes. Focused on delivering impactful, maintainable \
automation solutions that align with long-term product and business goals in agile, \
innovation-driven environments.";

pub const STRENGTHS: &[Strength] = &[
    Strength {
        icon: "💻",
        title: "Automation Architect",
        description: "Designing scalable test frameworks that improve coverage and efficiency",
    },
    Strength {
        icon: "🐞",
        title: "Quality Advocate",
        description: "Championing quality throughout the development lifecycle",
    },
    Strength {
        icon: "🧪",
        title: "Test Strategist",
        description: "Creating comprehensive testing strategies for complex applications",
    },
    Strength {
        icon: "📊",
        title: "Data-Driven Tester",
        description: "Leveraging metrics and data analysis to optimize testing efforts",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Selenium", proficiency: 95, category: SkillCategory::Automation },
    Skill { name: "Cypress", proficiency: 90, category: SkillCategory::Automation },
    Skill { name: "Playwright", proficiency: 85, category: SkillCategory::Automation },
    Skill { name: "Appium", proficiency: 80, category: SkillCategory::Automation },
    Skill { name: "Protractor", proficiency: 75, category: SkillCategory::Automation },
    Skill { name: "API Testing", proficiency: 95, category: SkillCategory::Testing },
    Skill { name: "Performance Testing", proficiency: 85, category: SkillCategory::Testing },
    Skill { name: "Security Testing", proficiency: 80, category: SkillCategory::Testing },
    Skill { name: "E2E Testing", proficiency: 90, category: SkillCategory::Testing },
    Skill { name: "BDD", proficiency: 85, category: SkillCategory::Testing },
    Skill { name: "Jenkins", proficiency: 90, category: SkillCategory::Tools },
    Skill { name: "JIRA", proficiency: 95, category: SkillCategory::Tools },
    Skill { name: "Docker", proficiency: 85, category: SkillCategory::Tools },
    Skill { name: "Git", proficiency: 90, category: SkillCategory::Tools },
    Skill { name: "Postman", proficiency: 95, category: SkillCategory::Tools },
    Skill { name: "Java", proficiency: 90, category: SkillCategory::Languages },
    Skill { name: "JavaScript", proficiency: 85, category: SkillCategory::Languages },
    Skill { name: "TypeScript", proficiency: 80, category: SkillCategory::Languages },
    Skill { name: "Python", proficiency: 85, category: SkillCategory::Languages },
    Skill { name: "SQL", proficiency: 90, category: SkillCategory::Languages },
];

pub const COMPETENCIES: &[&str] = &[
    "Test Planning",
    "Test Strategy",
    "Agile/Scrum",
    "CI/CD",
    "Accessibility Testing",
    "Mobile Testing",
    "Cross-Browser Testing",
    "Regression Testing",
    "Continuous Testing",
    "Test Management",
    "Risk Analysis",
    "Defect Management",
    "Test Metrics",
    "Root Cause Analysis",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Automation Framework",
        description: "Built a comprehensive test automation framework for a large e-commerce platform using Selenium, TestNG, and Java.",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["Selenium", "Java", "TestNG", "Maven", "Jenkins"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "Reduced regression testing time by 70%",
            "Implemented page object model and data-driven testing",
            "Integrated with CI/CD pipeline for continuous testing",
        ],
        category: ProjectCategory::Automation,
    },
    Project {
        id: 2,
        title: "API Testing Framework",
        description: "Developed a robust API testing framework using RestAssured and Cucumber for BDD-style test specifications.",
        image: "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["RestAssured", "Cucumber", "Java", "Maven", "CircleCI"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "99% API coverage with automated tests",
            "Implemented contract testing",
            "Created custom reporting dashboard",
        ],
        category: ProjectCategory::Testing,
    },
    Project {
        id: 3,
        title: "Mobile Testing Framework",
        description: "Created a cross-platform mobile testing solution using Appium with parallel test execution capability.",
        image: "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["Appium", "TypeScript", "Mocha", "Chai", "Docker"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "Supports both iOS and Android testing",
            "Reduced test execution time by 60%",
            "Implemented visual testing capabilities",
        ],
        category: ProjectCategory::Automation,
    },
    Project {
        id: 4,
        title: "Performance Testing Suite",
        description: "Implemented comprehensive performance testing using JMeter and Gatling for a high-traffic web application.",
        image: "https://images.pexels.com/photos/574073/pexels-photo-574073.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["JMeter", "Gatling", "Scala", "Grafana", "InfluxDB"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "Identified and resolved 5 critical bottlenecks",
            "Created reusable performance test scripts",
            "Implemented real-time performance monitoring",
        ],
        category: ProjectCategory::Testing,
    },
    Project {
        id: 5,
        title: "QA Metrics Dashboard",
        description: "Developed a real-time QA metrics dashboard to track test coverage, defects, and automation ROI.",
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["React", "D3.js", "Node.js", "MongoDB", "Express"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "Consolidated data from multiple testing tools",
            "Created customizable KPI dashboards",
            "Automated weekly quality reports",
        ],
        category: ProjectCategory::Tool,
    },
    Project {
        id: 6,
        title: "Security Testing Toolkit",
        description: "Built a security testing toolkit integrating OWASP ZAP for automated vulnerability scanning.",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["OWASP ZAP", "Python", "Docker", "Jenkins", "AWS"],
        demo_link: Some("#"),
        repo_link: Some("#"),
        highlights: &[
            "Automated security testing integrated with CI/CD",
            "Identified 23 critical vulnerabilities",
            "Implemented compliance reporting for SOC2",
        ],
        category: ProjectCategory::Testing,
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "ClearCourse",
        position: "Lead QA Automation Engineer",
        period: "2023 - 2024",
        description: "Leading a team of QA engineers to implement automated testing solutions for enterprise-level applications.",
        achievements: &[
            "Reduced regression testing time by 80% through strategic test automation",
            "Implemented CI/CD pipeline integration for continuous testing",
            "Led the transition from manual to automated testing processes",
            "Established QA best practices and coding standards for the team",
        ],
    },
    ExperienceEntry {
        company: "JCommerce Sp. z o.o.",
        position: "Test Automation Engineer",
        period: "2020 - 2023",
        description: "Responsible for designing and implementing test automation frameworks for web and mobile applications.",
        achievements: &[
            "Created and executed functional tests for web and mobile applications",
            "Developed and implemented API tests to validate backend services",
        ],
    },
    ExperienceEntry {
        company: "GlobalLogic",
        position: "Test Automation Engineer",
        period: "2019 - 2020",
        description: "Performed manual and automated testing for various web applications, focusing on functional and regression testing.",
        achievements: &[
            "Collaborated with the team to create a testing framework for embedded applications",
            "Prepared the test environment (host with virtual machines)",
            "Designed and automated test cases based on requirements",
            "Set up Jenkins jobs and test reports (CI)",
        ],
    },
    ExperienceEntry {
        company: "Infover",
        position: "Test Automation Engineer",
        period: "2017 - 2019",
        description: "Conducted manual and automation testing for web and mobile applications, created test cases, and reported defects.",
        achievements: &[
            "Created test architecture from scratch using Page Object Pattern (Selenium with C#)",
            "Performed functional testing for web, desktop, and mobile applications",
            "Developed expertise in exploratory testing techniques",
            "Prepared test suites for performance testing with JMeter and test cases for manual testing based on requirements",
            "Responsible for error and bug reporting",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        position: "CTO",
        company: "TechInnovate",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        text: "An exceptional QA lead who transformed our testing processes. The automation framework implemented saved us countless hours and significantly improved our product quality. A true professional with a keen eye for detail.",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        position: "Engineering Director",
        company: "SoftSolutions Inc.",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        text: "Working with such a dedicated QA professional was a game-changer for our team. The comprehensive test strategy and automation implementation reduced our regression testing time by 75% while increasing our test coverage. Highly recommended!",
    },
    Testimonial {
        id: 3,
        name: "Priya Patel",
        position: "Product Manager",
        company: "Digital Dynamics",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        text: "Our product quality improved dramatically thanks to the strategic QA leadership provided. Not only were technical skills impressive, but the ability to communicate effectively with all stakeholders made the entire process smooth and efficient.",
    },
    Testimonial {
        id: 4,
        name: "David Rodriguez",
        position: "Development Lead",
        company: "AppNova",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        text: "I've worked with many QA engineers, but none as thorough and proactive. The shift-left testing approach implemented caught issues early in the development cycle, saving us time and resources. A true quality advocate!",
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    email: "wojtakpawel@gmail.com",
    phone: "+48 660463861",
    city: "Kraków",
    region: "Małopolska",
};

/// Skills of one category, in declaration order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_data_sizes() {
        assert_eq!(SKILLS.len(), 20);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(EXPERIENCE.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 4);
    }

    #[test]
    fn test_proficiency_is_a_percentage() {
        for skill in SKILLS {
            assert!(skill.proficiency <= 100, "{} is over 100%", skill.name);
        }
    }

    #[test]
    fn test_every_skill_category_has_five_entries() {
        for category in SkillCategory::ALL {
            assert_eq!(skills_in(category).count(), 5, "{}", category.label());
        }
    }

    #[test]
    fn test_identifiers_are_unique() {
        let project_ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(project_ids.len(), PROJECTS.len());
        let testimonial_ids = TESTIMONIALS.iter().map(|t| t.id).collect::<HashSet<_>>();
        assert_eq!(testimonial_ids.len(), TESTIMONIALS.len());
    }

    #[test]
    fn test_projects_carry_tags_and_highlights() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(!project.highlights.is_empty(), "{}", project.title);
        }
    }
}
