// Static informational pages

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Homepage,
    Calculator,
    Formulation,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Homepage, Page::Calculator, Page::Formulation];

    /// Pages listed in the menu for the given login state.
    pub fn menu(logged_in: bool) -> Vec<Page> {
        Self::ALL
            .into_iter()
            .filter(|page| logged_in || *page != Page::Calculator)
            .collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Homepage => "Home",
            Page::Calculator => "Calculator",
            Page::Formulation => "Formulation",
        }
    }

    pub fn paragraphs(self) -> &'static [&'static str] {
        match self {
            Page::Homepage => HOMEPAGE,
            Page::Calculator => CALCULATOR,
            Page::Formulation => FORMULATION,
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "home" | "homepage" => Ok(Page::Homepage),
            "calculator" => Ok(Page::Calculator),
            "formulation" => Ok(Page::Formulation),
            other => Err(format!("unknown page '{}'", other)),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

const HOMEPAGE: &[&str] = &[
    "Integer programming optimizes decisions that come in whole units. Typical uses:",
    "1. Resource allocation: assigning people, machines or funds to tasks when they cannot be split.",
    "2. Production planning: choosing product quantities, setups and inventory levels.",
    "3. Network design and routing: opening links, picking routes, placing facilities.",
    "4. Project scheduling: sequencing activities under precedence and resource limits.",
    "5. Location planning: deciding where warehouses or distribution centers should be.",
    "6. Cutting stock: choosing how many times each cutting pattern is used to limit waste.",
];

const FORMULATION: &[&str] = &[
    "An integer program asks for values of decision variables that optimize a linear objective subject to linear constraints, with some variables restricted to whole numbers.",
    "Minimize (or maximize) Z = c1*x1 + c2*x2 + ... + cn*xn",
    "subject to ai1*x1 + ai2*x2 + ... + ain*xn (<=, =, >=) bi for i = 1..m",
    "x1, ..., xn >= 0, and every restricted xj is an integer.",
    "Integrality makes the problem combinatorial. Solvers use branch and bound and cutting planes on top of the simplex method.",
];

const CALCULATOR: &[&str] = &[
    "Enter the number of variables and constraints, then one objective coefficient per variable.",
    "Mark a variable Restricted to require a whole-number value; Unrestricted variables may be fractional. All variables are non-negative.",
    "For every constraint enter its coefficients, an operator (<=, =, >=) and a right-hand side.",
    "Choose Maximize or Minimize and submit to solve.",
];
