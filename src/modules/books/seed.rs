//! Records loaded into the catalog at startup.
//!
//! These are stored as-is: several predate 2000 or carry authors with
//! initials, which the create/update constraints would reject.

use super::models::{Book, BookId};

const SEED: &[(BookId, &str, &str, &str, i32, i32)] = &[
    (
        1,
        "Ulysses",
        "James Joyce",
        "A stream-of-consciousness voyage through one day in Dublin.",
        5,
        1922,
    ),
    (
        2,
        "Lolita",
        "Vladimir Nabokov",
        "A haunting exploration of obsession and the limits of morality.",
        5,
        1955,
    ),
    (
        3,
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "A tragic portrait of the American Dream set in the Jazz Age.",
        5,
        1925,
    ),
    (
        4,
        "Brave New World",
        "Aldous Huxley",
        "A chilling vision of a future society conditioned for conformity.",
        5,
        1932,
    ),
    (
        5,
        "Catch-22",
        "Joseph Heller",
        "Darkly comic tale of WWII airmen trapped by absurd bureaucracy.",
        5,
        1961,
    ),
    (
        6,
        "Moby-Dick",
        "Herman Melville",
        "An epic sea chase that probes the depths of obsession and revenge.",
        4,
        1851,
    ),
    (
        7,
        "War and Peace",
        "Leo Tolstoy",
        "A sweeping saga of Russian society during the Napoleonic Wars.",
        5,
        1869,
    ),
    (
        8,
        "The Adventures of Huckleberry Finn",
        "Mark Twain",
        "A boy’s raft journey down the Mississippi, exposing antebellum injustices.",
        5,
        1884,
    ),
    (
        9,
        "Middlemarch",
        "George Eliot",
        "A richly detailed portrait of provincial life and the intertwining fates of its citizens.",
        5,
        1872,
    ),
    (
        10,
        "Invisible Man",
        "Ralph Ellison",
        "A powerful story of identity and racism in mid-century America.",
        5,
        1952,
    ),
    (
        11,
        "Beloved",
        "Toni Morrison",
        "A searing novel of slavery’s legacy, haunted by the past and a restless spirit.",
        5,
        1987,
    ),
    (
        12,
        "Mrs. Dalloway",
        "Virginia Woolf",
        "A single day in post-WWI London, capturing one woman’s memories and reveries.",
        4,
        1925,
    ),
    (
        13,
        "One Hundred Years of Solitude",
        "Gabriel García Márquez",
        "A multi-generation tale of the Buendía family in the mythical town of Macondo.",
        5,
        1967,
    ),
    (
        14,
        "The Catcher in the Rye",
        "J.D. Salinger",
        "An alienated teen’s journey through New York City and his own disillusionment.",
        4,
        1951,
    ),
    (
        15,
        "The Grapes of Wrath",
        "John Steinbeck",
        "A Dust Bowl family’s harrowing trek to California in search of dignity and work.",
        5,
        1939,
    ),
    (
        16,
        "The Sun Also Rises",
        "Ernest Hemingway",
        "A post-WWI “Lost Generation” story of love, bullfights, and expatriate disillusionment.",
        4,
        1926,
    ),
    (
        17,
        "Heart of Darkness",
        "Joseph Conrad",
        "A river voyage into the Congo that lays bare colonial brutality and moral decay.",
        5,
        1899,
    ),
    (
        18,
        "Frankenstein",
        "Mary Shelley",
        "A Gothic tale of creation and responsibility, pioneering science-fiction themes.",
        4,
        1818,
    ),
    (
        19,
        "Dracula",
        "Bram Stoker",
        "The classic vampire novel that melds horror, suspense, and Victorian anxieties.",
        4,
        1897,
    ),
    (
        20,
        "Crime and Punishment",
        "Fyodor Dostoevsky",
        "A tortured student’s moral struggle after committing a terrible deed.",
        5,
        1866,
    ),
];

/// The seed catalog, ids 1 through 20 in display order.
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .map(
            |&(id, title, author, description, rating, published_date)| Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
                description: description.to_string(),
                rating,
                published_date,
            },
        )
        .collect()
}
