use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// The four fixed ingredient groupings, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vegetable,
    Herb,
    Fruit,
    Protein,
}

impl Category {
    /// All categories in the order they are created in the category index.
    pub const ALL: [Category; 4] = [
        Category::Vegetable,
        Category::Herb,
        Category::Fruit,
        Category::Protein,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetable => "Vegetable",
            Self::Herb => "Herb",
            Self::Fruit => "Fruit",
            Self::Protein => "Protein",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Vegetable" => Some(Self::Vegetable),
            "Herb" => Some(Self::Herb),
            "Fruit" => Some(Self::Fruit),
            "Protein" => Some(Self::Protein),
            _ => None,
        }
    }

    /// Name of the table holding this category's ingredients
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Vegetable => "vegetable",
            Self::Herb => "herb",
            Self::Fruit => "fruit",
            Self::Protein => "protein",
        }
    }

    /// Default source file name inside the data directory
    pub fn source_file_name(&self) -> &'static str {
        match self {
            Self::Vegetable => "veggies.csv",
            Self::Herb => "herbs.csv",
            Self::Fruit => "fruit.csv",
            Self::Protein => "proteins.csv",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Self::from_str(s).ok_or_else(|| FromSqlError::Other(format!("Unknown category: {}", s).into()))
    }
}

/// One row of a category table.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Fraction of the purchased amount left after trimming, in [0, 1]
    pub edible_yield: f64,
    /// Bought by the pound (true) or by the piece (false)
    pub by_weight: bool,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, edible_yield: f64, by_weight: bool) -> Self {
        Self {
            id: 0,
            name: name.into(),
            edible_yield,
            by_weight,
        }
    }
}
