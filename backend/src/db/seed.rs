//! Demo catalog data.
//!
//! Inserts a small, fixed catalog (two libraries and their staff, authors,
//! books, genres and loans). Rows have fixed IDs and use INSERT OR IGNORE so
//! re-runs are idempotent. Timestamps increase with declaration order, which
//! makes declaration order the natural list order.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Result of running seed operations.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub tables_seeded: Vec<String>,
    pub errors: Vec<String>,
}

/// 2024-01-01T00:00:00Z
const SEED_EPOCH: i64 = 1_704_067_200;

/// Creation time of the `n`th seeded row of a table.
fn seeded_at(n: usize) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH + n as i64 * 60, 0).unwrap_or_default()
}

struct Address {
    street: &'static str,
    additional: Option<&'static str>,
    city: &'static str,
    country: &'static str,
    zip: &'static str,
}

struct LibraryRow {
    id: &'static str,
    name: &'static str,
    address: Address,
    phone: &'static str,
    email: &'static str,
}

struct UserRow {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: Address,
}

const LIBRARIES: &[LibraryRow] = &[
    LibraryRow {
        id: "lib-central",
        name: "Central Library",
        address: Address {
            street: "1 Market Square",
            additional: None,
            city: "Springfield",
            country: "US",
            zip: "49007",
        },
        phone: "+1 555 0100",
        email: "central@library.example",
    },
    LibraryRow {
        id: "lib-riverside",
        name: "Riverside Branch",
        address: Address {
            street: "48 River Road",
            additional: Some("Ground floor"),
            city: "Springfield",
            country: "US",
            zip: "49011",
        },
        phone: "+1 555 0148",
        email: "riverside@library.example",
    },
];

const USERS: &[UserRow] = &[
    UserRow {
        id: "user-ada",
        name: "Ada Lovelace",
        email: "ada@example.com",
        phone: "+1 555 0201",
        address: Address {
            street: "12 Analytical Way",
            additional: None,
            city: "Springfield",
            country: "US",
            zip: "49007",
        },
    },
    UserRow {
        id: "user-grace",
        name: "Grace Hopper",
        email: "grace@example.com",
        phone: "+1 555 0202",
        address: Address {
            street: "7 Compiler Court",
            additional: Some("Apt 3"),
            city: "Springfield",
            country: "US",
            zip: "49008",
        },
    },
    UserRow {
        id: "user-linus",
        name: "Linus Pauling",
        email: "linus@example.com",
        phone: "+1 555 0203",
        address: Address {
            street: "90 Helix Street",
            additional: None,
            city: "Springfield",
            country: "US",
            zip: "49011",
        },
    },
    UserRow {
        id: "user-margaret",
        name: "Margaret Hamilton",
        email: "margaret@example.com",
        phone: "+1 555 0204",
        address: Address {
            street: "11 Apollo Avenue",
            additional: None,
            city: "Springfield",
            country: "US",
            zip: "49009",
        },
    },
];

/// (library, manager)
const MANAGERS: &[(&str, &str)] = &[
    ("lib-central", "user-ada"),
    ("lib-central", "user-grace"),
    ("lib-riverside", "user-grace"),
];

/// (id, name, library)
const AUTHORS: &[(&str, &str, &str)] = &[
    ("author-austen", "Jane Austen", "lib-central"),
    ("author-tolkien", "J. R. R. Tolkien", "lib-central"),
    ("author-le-guin", "Ursula K. Le Guin", "lib-riverside"),
];

/// (id, name)
const GENRES: &[(&str, &str)] = &[
    ("genre-classic", "Classic"),
    ("genre-fantasy", "Fantasy"),
    ("genre-romance", "Romance"),
    ("genre-scifi", "Science Fiction"),
];

struct BookRow {
    id: &'static str,
    title: &'static str,
    isbn: Option<&'static str>,
    identifier: &'static str,
    author: &'static str,
    location: &'static str,
    genres: &'static [&'static str],
}

const BOOKS: &[BookRow] = &[
    BookRow {
        id: "book-pride",
        title: "Pride and Prejudice",
        isbn: Some("9780141439518"),
        identifier: "AUS-001",
        author: "author-austen",
        location: "lib-central",
        genres: &["genre-classic", "genre-romance"],
    },
    BookRow {
        id: "book-emma",
        title: "Emma",
        isbn: Some("9780141439587"),
        identifier: "AUS-002",
        author: "author-austen",
        location: "lib-central",
        genres: &["genre-classic", "genre-romance"],
    },
    BookRow {
        id: "book-persuasion",
        title: "Persuasion",
        isbn: Some("9780141439686"),
        identifier: "AUS-003",
        author: "author-austen",
        location: "lib-central",
        genres: &["genre-classic", "genre-romance"],
    },
    BookRow {
        id: "book-sense",
        title: "Sense and Sensibility",
        isbn: None,
        identifier: "AUS-004",
        author: "author-austen",
        location: "lib-central",
        genres: &["genre-classic", "genre-romance"],
    },
    BookRow {
        id: "book-hobbit",
        title: "The Hobbit",
        isbn: Some("9780547928227"),
        identifier: "TOL-001",
        author: "author-tolkien",
        location: "lib-central",
        genres: &["genre-classic", "genre-fantasy"],
    },
    BookRow {
        id: "book-fellowship",
        title: "The Fellowship of the Ring",
        isbn: Some("9780547928210"),
        identifier: "TOL-002",
        author: "author-tolkien",
        location: "lib-central",
        genres: &["genre-classic", "genre-fantasy"],
    },
    BookRow {
        id: "book-towers",
        title: "The Two Towers",
        isbn: Some("9780547928203"),
        identifier: "TOL-003",
        author: "author-tolkien",
        location: "lib-riverside",
        genres: &["genre-classic", "genre-fantasy"],
    },
    BookRow {
        id: "book-return",
        title: "The Return of the King",
        isbn: Some("9780547928197"),
        identifier: "TOL-004",
        author: "author-tolkien",
        location: "lib-riverside",
        genres: &["genre-classic", "genre-fantasy"],
    },
    BookRow {
        id: "book-earthsea",
        title: "A Wizard of Earthsea",
        isbn: Some("9780547722023"),
        identifier: "LEG-001",
        author: "author-le-guin",
        location: "lib-riverside",
        genres: &["genre-fantasy"],
    },
    BookRow {
        id: "book-left-hand",
        title: "The Left Hand of Darkness",
        isbn: Some("9780441478125"),
        identifier: "LEG-002",
        author: "author-le-guin",
        location: "lib-riverside",
        genres: &["genre-scifi"],
    },
    BookRow {
        id: "book-dispossessed",
        title: "The Dispossessed",
        isbn: Some("9780061054884"),
        identifier: "LEG-003",
        author: "author-le-guin",
        location: "lib-riverside",
        genres: &["genre-scifi"],
    },
    BookRow {
        id: "book-lathe",
        title: "The Lathe of Heaven",
        isbn: None,
        identifier: "LEG-004",
        author: "author-le-guin",
        location: "lib-riverside",
        genres: &["genre-scifi"],
    },
];

/// (id, book, borrower, location)
const ISSUES: &[(&str, &str, &str, &str)] = &[
    ("issue-1", "book-pride", "user-ada", "lib-central"),
    ("issue-2", "book-hobbit", "user-linus", "lib-central"),
    ("issue-3", "book-earthsea", "user-linus", "lib-riverside"),
    ("issue-4", "book-emma", "user-margaret", "lib-central"),
    ("issue-5", "book-dispossessed", "user-grace", "lib-riverside"),
];

/// Loan period applied to seeded issues.
const LOAN_DAYS: i64 = 14;

async fn seed_libraries(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, row) in LIBRARIES.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO libraries
                (id, created_at, updated_at, name, street, additional, city, country, zip, phone, email)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(row.id)
        .bind(at)
        .bind(at)
        .bind(row.name)
        .bind(row.address.street)
        .bind(row.address.additional)
        .bind(row.address.city)
        .bind(row.address.country)
        .bind(row.address.zip)
        .bind(row.phone)
        .bind(row.email)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_users(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, row) in USERS.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO users
                (id, created_at, updated_at, name, email, phone, street, additional, city, country, zip)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(row.id)
        .bind(at)
        .bind(at)
        .bind(row.name)
        .bind(row.email)
        .bind(row.phone)
        .bind(row.address.street)
        .bind(row.address.additional)
        .bind(row.address.city)
        .bind(row.address.country)
        .bind(row.address.zip)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_managers(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (library_id, user_id) in MANAGERS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO library_managers (library_id, user_id) VALUES (?, ?)",
        )
        .bind(*library_id)
        .bind(*user_id)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_authors(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, (id, name, library_id)) in AUTHORS.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO authors (id, created_at, updated_at, name, library_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(*id)
        .bind(at)
        .bind(at)
        .bind(*name)
        .bind(*library_id)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_genres(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, (id, name)) in GENRES.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO genres (id, created_at, updated_at, name) VALUES (?, ?, ?, ?)",
        )
        .bind(*id)
        .bind(at)
        .bind(at)
        .bind(*name)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_books(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, row) in BOOKS.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO books
                (id, created_at, updated_at, title, description, isbn, identifier, author_id, location_id)
            VALUES (?, ?, ?, ?, NULL, ?, ?, ?, ?)
            "#,
        )
        .bind(row.id)
        .bind(at)
        .bind(at)
        .bind(row.title)
        .bind(row.isbn)
        .bind(row.identifier)
        .bind(row.author)
        .bind(row.location)
        .execute(pool)
        .await?
        .rows_affected();

        for genre_id in row.genres {
            sqlx::query("INSERT OR IGNORE INTO book_genres (book_id, genre_id) VALUES (?, ?)")
                .bind(row.id)
                .bind(*genre_id)
                .execute(pool)
                .await?;
        }
    }
    Ok(inserted)
}

async fn seed_issues(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (n, (id, book_id, borrower_id, location_id)) in ISSUES.iter().enumerate() {
        let at = seeded_at(n);
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO issues
                (id, created_at, updated_at, due_date, book_id, borrower_id, location_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*id)
        .bind(at)
        .bind(at)
        .bind(at + Duration::days(LOAN_DAYS))
        .bind(*book_id)
        .bind(*borrower_id)
        .bind(*location_id)
        .execute(pool)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

/// Seed the demo catalog. Parent tables go first so foreign keys resolve.
pub async fn run_seeds(pool: &SqlitePool) -> SeedResult {
    let mut result = SeedResult::default();

    for (table, count) in [
        ("libraries", seed_libraries(pool).await),
        ("users", seed_users(pool).await),
        ("library_managers", seed_managers(pool).await),
        ("authors", seed_authors(pool).await),
        ("genres", seed_genres(pool).await),
        ("books", seed_books(pool).await),
        ("issues", seed_issues(pool).await),
    ] {
        match count {
            Ok(n) => {
                if n > 0 {
                    debug!(table = table, count = n, "Seeded table");
                    result.tables_seeded.push(format!("{} ({} rows)", table, n));
                }
            }
            Err(e) => {
                let msg = format!("Seed {}: {}", table, e);
                warn!("{}", msg);
                result.errors.push(msg);
            }
        }
    }

    if !result.tables_seeded.is_empty() {
        info!(tables = ?result.tables_seeded, "Demo catalog seeded");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_timestamps_follow_declaration_order() {
        assert!(seeded_at(0) < seeded_at(1));
        assert_eq!(seeded_at(0).to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_seed_references_exist() {
        let library = |id: &str| LIBRARIES.iter().any(|l| l.id == id);
        let user = |id: &str| USERS.iter().any(|u| u.id == id);
        let book = |id: &str| BOOKS.iter().any(|b| b.id == id);

        assert!(MANAGERS.iter().all(|(l, u)| library(*l) && user(*u)));
        assert!(AUTHORS.iter().all(|(_, _, l)| library(*l)));
        assert!(BOOKS.iter().all(|b| {
            library(b.location)
                && AUTHORS.iter().any(|(a, _, _)| *a == b.author)
                && b.genres.iter().all(|g| GENRES.iter().any(|(id, _)| id == g))
        }));
        assert!(ISSUES.iter().all(|(_, b, u, l)| book(*b) && user(*u) && library(*l)));
    }
}
