use std::fmt;

/// A row of the `books` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: f32,
}

/// Renders the book as `isbn, title, author, £price` with the price rounded to two decimals.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, £{:.2}",
            self.isbn, self.title, self.author, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_price_to_two_decimals() {
        let book = Book {
            isbn: "978-1470184841".to_string(),
            title: "Metamorphosis".to_string(),
            author: "Franz Kafka".to_string(),
            price: 5.9,
        };

        assert_eq!(
            book.to_string(),
            "978-1470184841, Metamorphosis, Franz Kafka, £5.90"
        );

        let book = Book { price: 12.345_6, ..book };

        assert!(book.to_string().ends_with("£12.35"));
    }
}
