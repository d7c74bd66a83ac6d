//! Skill and project entries shown on the page.

/// One skill with its proficiency bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0-100.
    pub level: u8,
    /// Font Awesome icon classes.
    pub icon: &'static str,
}

/// One project card. Empty link fields render no anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub image: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", level: 95, icon: "fab fa-html5" },
    Skill { name: "CSS3", level: 90, icon: "fab fa-css3-alt" },
    Skill { name: "JavaScript", level: 88, icon: "fab fa-js" },
    Skill { name: "Python", level: 92, icon: "fab fa-python" },
    Skill { name: "React.js", level: 80, icon: "fab fa-react" },
    Skill { name: "Node.js", level: 75, icon: "fab fa-node-js" },
    Skill { name: "Flask", level: 85, icon: "fas fa-flask" },
    Skill { name: "SQL", level: 70, icon: "fas fa-database" },
    Skill { name: "Machine Learning", level: 90, icon: "fas fa-robot" },
    Skill { name: "Deep Learning", level: 80, icon: "fas fa-microchip" },
    Skill { name: "NLP", level: 78, icon: "fas fa-language" },
    Skill { name: "Git & GitHub", level: 85, icon: "fab fa-git-alt" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Blog",
        description: "A real-time Blog application with using Python and Flask.",
        technologies: &["Python", "Flask", "JavaScript", "HTML", "CSS"],
        github: "https://github.com/rasool321/Blog",
        live: "",
        image: "images/blog.png",
    },
    Project {
        title: "TODO",
        description: "Full-featured TODO with React",
        technologies: &["React", "JS", "HTML", "CSS", "JS"],
        github: "https://github.com/rasool321/Todo-React",
        live: "https://todorea.netlify.app/",
        image: "images/todo.png",
    },
    Project {
        title: "Google Clone",
        description: "My Google Clone shows information as per quires.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
        github: "https://github.com/rasool321/Google-Clone",
        live: "https://rasool321.github.io/Google-Clone/",
        image: "images/google.png",
    },
    Project {
        title: "Insta-Clone",
        description: "Insta-Clone using PHP.",
        technologies: &["PHP", "MySql", "HTML", "JS", "CSS"],
        github: "https://github.com/rasool321/Insta-clone",
        live: "http://www.instaclone.infy.uk/",
        image: "images/insta.png",
    },
    Project {
        title: "Etch-a-Sketch",
        description: "A fun and interactive Etch-a-Sketch web application where users can draw using an RGB mode, darken effect, and eraser. Features include grid resizing, dark/light mode toggle, and a sidebar for them.",
        technologies: &["HTML", "CSS", "JS"],
        github: "https://github.com/rasool321/Etch-a-Sketch",
        live: "https://rasool321.github.io/Etch-a-Sketch/",
        image: "images/etch.png",
    },
];

/// Name shown in the hero and footer.
pub const OWNER_NAME: &str = "Rasool";
