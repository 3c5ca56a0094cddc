//! Fixed template tables for the mock generator.

use serde_json::Value;

use crate::models::{Segment, SegmentType};

/// Role keyword → course titles. Checked in order; first substring match wins.
pub static COURSE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "Fundamentals of Programming",
            "Data Structures and Algorithms",
            "Software Design Patterns",
            "Database Management Systems",
            "Web Development Technologies",
            "Version Control and Collaboration",
            "Testing and Quality Assurance",
            "DevOps and Deployment",
        ],
    ),
    (
        "data scientist",
        &[
            "Statistics and Probability",
            "Python for Data Science",
            "Data Visualization and Analysis",
            "Machine Learning Fundamentals",
            "Database and SQL Mastery",
            "Big Data Technologies",
            "Deep Learning and Neural Networks",
            "Business Intelligence and Reporting",
        ],
    ),
    (
        "product manager",
        &[
            "Product Strategy and Vision",
            "Market Research and Analysis",
            "User Experience Design Principles",
            "Agile Project Management",
            "Data-Driven Decision Making",
            "Stakeholder Communication",
            "Go-to-Market Strategy",
            "Product Metrics and Analytics",
        ],
    ),
];

pub static DEFAULT_COURSES: &[&str] = &[
    "Industry Fundamentals",
    "Core Technical Skills",
    "Professional Development",
    "Advanced Techniques",
    "Leadership and Communication",
    "Project Management",
];

/// Topic keyword → module titles.
pub static MODULE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "Introduction to Programming Concepts",
            "Variables and Data Types",
            "Control Structures and Logic",
            "Functions and Procedures",
            "Object-Oriented Programming",
            "Error Handling and Debugging",
        ],
    ),
    (
        "data",
        &[
            "Introduction to Data Analysis",
            "Data Collection and Cleaning",
            "Exploratory Data Analysis",
            "Statistical Methods",
            "Data Visualization Techniques",
            "Advanced Analytics",
        ],
    ),
    (
        "management",
        &[
            "Leadership Fundamentals",
            "Team Building and Communication",
            "Project Planning and Execution",
            "Risk Management",
            "Performance Measurement",
            "Continuous Improvement",
        ],
    ),
];

pub static DEFAULT_MODULES: &[&str] = &[
    "Introduction and Overview",
    "Core Concepts",
    "Practical Applications",
    "Advanced Topics",
    "Best Practices",
    "Final Project",
];

/// Segments after the module-specific overview segment.
pub static FIXED_SEGMENTS: &[(&str, SegmentType)] = &[
    ("Key Concepts and Terminology", SegmentType::Info),
    ("Industry Research Assignment", SegmentType::Research),
    ("Hands-on Practice Exercise", SegmentType::Exercise),
    ("Group Discussion: Best Practices", SegmentType::Discussion),
    ("Capstone Project", SegmentType::Project),
];

pub const ETHICS_COURSE: &str = "Professional Ethics and Standards";
pub const TRENDS_COURSE: &str = "Industry Trends and Future Outlook";
pub const WORKSHOP_MODULE: &str = "Hands-on Workshop Session";
pub const WORKSHOP_MODULE_IDX: usize = 2;
pub const CASE_STUDY_SEGMENT: &str = "Real-world Case Study Analysis";
pub const CASE_STUDY_SEGMENT_IDX: usize = 3;

const TITLE: &str = "{title}";
const TITLE_LOWER: &str = "{title_lower}";

const INFO_TEMPLATE: &str = r#"# {title}

## Learning Objectives
By the end of this section, you will be able to:
- Understand the core concepts related to {title_lower}
- Apply fundamental principles in practical scenarios
- Identify key terminology and best practices

## Introduction
This section provides a comprehensive overview of {title_lower}, covering essential concepts that form the foundation for advanced topics.

## Key Concepts
### Concept 1: Fundamentals
Description of the fundamental principles and why they matter.

### Concept 2: Applications
How these concepts apply in real-world scenarios.

### Concept 3: Best Practices
Industry-standard approaches and methodologies.

## Summary
- Key takeaway 1
- Key takeaway 2
- Key takeaway 3

## Next Steps
Proceed to the next section to build upon these foundational concepts."#;

const RESEARCH_TEMPLATE: &str = r#"# {title}

## Research Assignment Overview
This research assignment will help you explore {title_lower} in depth and understand current industry trends.

## Objectives
- Conduct thorough research on the given topic
- Analyze current market trends and developments
- Present findings in a structured format

## Assignment Instructions
1. **Research Phase** (2-3 hours)
   - Review at least 5 credible sources
   - Take detailed notes on key findings
   - Identify emerging trends and challenges

2. **Analysis Phase** (1-2 hours)
   - Compare different perspectives
   - Identify common themes
   - Draw meaningful conclusions

3. **Documentation Phase** (1 hour)
   - Create a summary report
   - Include references and citations
   - Prepare for group discussion

## Deliverables
- Research summary (500-750 words)
- List of sources with brief annotations
- 3-5 key insights or recommendations

## Evaluation Criteria
- Quality and credibility of sources
- Depth of analysis
- Clarity of presentation
- Actionable insights"#;

const EXERCISE_TEMPLATE: &str = r#"# {title}

## Exercise Overview
This hands-on exercise will give you practical experience with {title_lower}.

## Learning Outcomes
- Apply theoretical knowledge to practical scenarios
- Develop problem-solving skills
- Build confidence through hands-on practice

## Prerequisites
- Completion of previous information sections
- Basic understanding of core concepts

## Exercise Instructions

### Part 1: Setup (15 minutes)
1. Prepare your workspace
2. Gather necessary materials
3. Review the exercise requirements

### Part 2: Implementation (45 minutes)
1. **Step 1**: Initial setup and configuration
2. **Step 2**: Core implementation
3. **Step 3**: Testing and validation
4. **Step 4**: Optimization and refinement

### Part 3: Review and Reflection (15 minutes)
1. Test your solution
2. Document lessons learned
3. Identify areas for improvement

## Expected Results
By completing this exercise, you should have:
- A working solution to the given problem
- Better understanding of practical applications
- Confidence to tackle similar challenges

## Troubleshooting
Common issues and their solutions:
- Issue 1: Solution approach
- Issue 2: Alternative method
- Issue 3: Best practice recommendation"#;

const DISCUSSION_TEMPLATE: &str = r#"# {title}

## Discussion Forum Guidelines
Welcome to our collaborative discussion on {title_lower}.

## Discussion Objectives
- Share diverse perspectives and experiences
- Learn from peer insights and best practices
- Build a community of practice

## Discussion Prompts

### Main Question
How has {title_lower} impacted your current or desired work environment?

### Follow-up Questions
1. What challenges have you encountered related to this topic?
2. What successful strategies or solutions have you observed?
3. How do you see this area evolving in the future?

## Participation Guidelines
- **Initial Post**: Share your thoughts on the main question (150-200 words)
- **Peer Responses**: Respond to at least 2 classmates' posts thoughtfully
- **Professional Tone**: Maintain respectful and constructive dialogue
- **Evidence-Based**: Support opinions with examples or references when possible

## Discussion Timeline
- **Days 1-3**: Initial posts
- **Days 4-6**: Peer responses and follow-up discussions
- **Day 7**: Final reflections and synthesis

## Evaluation Criteria
- Quality and depth of initial post
- Meaningful engagement with peers
- Use of course concepts and terminology
- Professionalism and respect in all interactions

## Resources for Reference
- Course materials from previous sections
- Industry articles and case studies
- Professional experience and observations"#;

const PROJECT_TEMPLATE: &str = r#"# {title}

## Project Overview
This capstone project integrates all concepts learned about {title_lower} into a comprehensive, real-world application.

## Project Objectives
- Demonstrate mastery of course concepts
- Apply skills to solve a practical problem
- Create a portfolio piece for professional development

## Project Scope
Design and implement a solution that addresses a real-world challenge related to {title_lower}.

## Project Requirements

### Phase 1: Planning and Design (Week 1)
- **Problem Definition**: Clearly articulate the challenge you're addressing
- **Research**: Investigate existing solutions and best practices
- **Design**: Create detailed project plan and specifications
- **Timeline**: Develop realistic milestones and deliverables

### Phase 2: Implementation (Weeks 2-3)
- **Development**: Build your solution according to specifications
- **Testing**: Validate functionality and performance
- **Documentation**: Create user guides and technical documentation
- **Iteration**: Refine based on testing feedback

### Phase 3: Presentation and Evaluation (Week 4)
- **Final Documentation**: Complete project report
- **Presentation**: Prepare 10-minute presentation
- **Peer Review**: Participate in peer evaluation process
- **Reflection**: Submit learning reflection essay

## Deliverables
1. Project proposal and plan (Week 1)
2. Progress reports (Weeks 2-3)
3. Final solution/product (Week 4)
4. Technical documentation (Week 4)
5. Presentation slides and demo (Week 4)
6. Reflection essay (Week 4)

## Evaluation Criteria
- **Technical Execution** (40%): Quality and functionality of solution
- **Problem-Solving** (25%): Approach to addressing the challenge
- **Documentation** (20%): Clarity and completeness of documentation
- **Presentation** (15%): Communication of project and results

## Support Resources
- Office hours for technical guidance
- Peer collaboration encouraged
- Industry mentor connections available
- Technical resources and tools provided"#;

const REFINEMENT_CLOSING: &str = "Here are some additional considerations and expanded details to address your specific requirements. This refined content provides more depth and practical applications relevant to your learning objectives.";

fn keyword_match<'a>(
    text: &str,
    table: &'a [(&str, &'a [&'a str])],
    fallback: &'a [&'a str],
) -> &'a [&'a str] {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, titles)| *titles)
        .unwrap_or(fallback)
}

fn to_owned_list(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

/// Course titles for a job title.
pub fn course_titles_for_job(job_title: &str) -> Vec<String> {
    to_owned_list(keyword_match(job_title, COURSE_TEMPLATES, DEFAULT_COURSES))
}

/// Module titles for a course title.
pub fn module_titles_for_course(course_title: &str) -> Vec<String> {
    to_owned_list(keyword_match(course_title, MODULE_TEMPLATES, DEFAULT_MODULES))
}

pub fn segments_for_module(module_title: &str) -> Vec<Segment> {
    std::iter::once(Segment::new(
        format!("{} Overview", module_title),
        SegmentType::Info,
    ))
    .chain(
        FIXED_SEGMENTS
            .iter()
            .map(|(title, segment_type)| Segment::new(*title, *segment_type)),
    )
    .collect()
}

fn content_template(segment_type: SegmentType) -> &'static str {
    match segment_type {
        SegmentType::Info => INFO_TEMPLATE,
        SegmentType::Research => RESEARCH_TEMPLATE,
        SegmentType::Exercise => EXERCISE_TEMPLATE,
        SegmentType::Discussion => DISCUSSION_TEMPLATE,
        SegmentType::Project => PROJECT_TEMPLATE,
    }
}

/// Substitute placeholders in one pass so a title containing placeholder
/// text is copied through verbatim.
fn render(template: &str, title: &str) -> String {
    let title_lower = title.to_lowercase();
    let mut out = String::with_capacity(template.len() + title.len() * 4);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(TITLE_LOWER) {
            out.push_str(&title_lower);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(TITLE) {
            out.push_str(title);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

pub fn content_for_segment(segment_title: &str, segment_type: SegmentType) -> String {
    render(content_template(segment_type), segment_title)
}

/// Text of a free-form JSON field: strings verbatim, anything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `content` followed by an "Additional Insights" section quoting the feedback.
pub fn append_insights(content: &str, additional_context: &str) -> String {
    format!(
        "{}\n\n## Additional Insights\n\nBased on your feedback: \"{}\"\n\n{}",
        content, additional_context, REFINEMENT_CLOSING
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_match_is_case_insensitive_substring() {
        let titles = course_titles_for_job("Senior SOFTWARE Engineer II");
        assert_eq!(titles.len(), 8);
        assert_eq!(titles[0], "Fundamentals of Programming");
        assert_eq!(titles[7], "DevOps and Deployment");
    }

    #[test]
    fn unknown_job_gets_default_courses() {
        let titles = course_titles_for_job("Beekeeper");
        assert_eq!(titles, to_owned_list(DEFAULT_COURSES));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn first_matching_keyword_wins() {
        // Contains both "data" and "programming"; "programming" is listed first.
        let titles = module_titles_for_course("Data Programming");
        assert_eq!(titles[0], "Introduction to Programming Concepts");
    }

    #[test]
    fn module_templates_have_six_titles() {
        for (keyword, titles) in MODULE_TEMPLATES {
            assert_eq!(titles.len(), 6, "{}", keyword);
        }
        assert_eq!(module_titles_for_course("Pottery").len(), 6);
    }

    #[test]
    fn segments_start_with_module_overview() {
        let segments = segments_for_module("Risk Management");
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].title, "Risk Management Overview");
        assert_eq!(segments[0].segment_type, SegmentType::Info);
        assert_eq!(segments[5].segment_type, SegmentType::Project);
    }

    #[test]
    fn content_interpolates_heading_and_lowercase_title() {
        let content = content_for_segment("Hands-on Lab", SegmentType::Exercise);
        assert!(content.starts_with("# Hands-on Lab\n"));
        assert!(content.contains("## Exercise Overview"));
        assert!(content.contains("practical experience with hands-on lab."));
        assert!(!content.contains("{title"));
    }

    #[test]
    fn every_type_has_distinct_template() {
        let rendered: Vec<String> = [
            SegmentType::Info,
            SegmentType::Research,
            SegmentType::Exercise,
            SegmentType::Discussion,
            SegmentType::Project,
        ]
        .into_iter()
        .map(|t| content_for_segment("T", t))
        .collect();

        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn render_copies_placeholder_lookalikes_verbatim() {
        let content = render("# {title} / {title_lower} / {other}", "A {title_lower} B");
        assert_eq!(content, "# A {title_lower} B / a {title_lower} b / {other}");
    }

    #[test]
    fn value_text_keeps_strings_verbatim() {
        assert_eq!(value_text(&Value::from("plain \"quoted\"")), "plain \"quoted\"");
        assert_eq!(value_text(&Value::from(42)), "42");
        assert_eq!(value_text(&serde_json::json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn insights_are_appended() {
        let refined = append_insights("# Intro", "more examples please");
        assert!(refined.starts_with("# Intro\n\n## Additional Insights\n\n"));
        assert!(refined.contains("Based on your feedback: \"more examples please\""));
        assert!(refined.ends_with(REFINEMENT_CLOSING));
    }
}
