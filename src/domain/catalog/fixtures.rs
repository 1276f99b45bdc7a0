// Test catalog: twenty well-known titles in storage order.

use crate::domain::movie::Movie;

pub(crate) fn sample_catalog() -> Vec<Movie> {
    [
        ("The Shawshank Redemption", 1994, 142, "Frank Darabont", "Tim Robbins, Morgan Freeman", &["Drama"][..]),
        ("The Godfather", 1972, 175, "Francis Ford Coppola", "Marlon Brando, Al Pacino", &["Crime", "Drama"][..]),
        ("The Dark Knight", 2008, 152, "Christopher Nolan", "Christian Bale, Heath Ledger", &["Action", "Crime", "Drama"][..]),
        ("12 Angry Men", 1957, 96, "Sidney Lumet", "Henry Fonda, Lee J. Cobb", &["Crime", "Drama"][..]),
        ("Schindler's List", 1993, 195, "Steven Spielberg", "Liam Neeson, Ralph Fiennes", &["Biography", "Drama", "History"][..]),
        ("Pulp Fiction", 1994, 154, "Quentin Tarantino", "John Travolta, Uma Thurman", &["Crime", "Drama"][..]),
        ("The Good, the Bad and the Ugly", 1966, 161, "Sergio Leone", "Clint Eastwood, Eli Wallach", &["Western"][..]),
        ("Fight Club", 1999, 139, "David Fincher", "Brad Pitt, Edward Norton", &["Drama"][..]),
        ("Forrest Gump", 1994, 142, "Robert Zemeckis", "Tom Hanks, Robin Wright", &["Drama", "Romance"][..]),
        ("Inception", 2010, 148, "Christopher Nolan", "Leonardo DiCaprio, Joseph Gordon-Levitt", &["Action", "Sci-Fi"][..]),
        ("Goodfellas", 1990, 146, "Martin Scorsese", "Robert De Niro, Ray Liotta", &["Biography", "Crime", "Drama"][..]),
        ("Seven Samurai", 1954, 207, "Akira Kurosawa", "Toshiro Mifune, Takashi Shimura", &["Action", "Drama"][..]),
        ("City of God", 2002, 130, "Fernando Meirelles", "Alexandre Rodrigues, Leandro Firmino", &["Crime", "Drama"][..]),
        ("Casablanca", 1942, 102, "Michael Curtiz", "Humphrey Bogart, Ingrid Bergman", &["Drama", "Romance", "War"][..]),
        ("The Third Man", 1949, 104, "Carol Reed", "Joseph Cotten, Orson Welles", &["Film-Noir", "Mystery", "Thriller"][..]),
        ("Psycho", 1960, 109, "Alfred Hitchcock", "Anthony Perkins, Janet Leigh", &["Horror", "Mystery", "Thriller"][..]),
        ("Rear Window", 1954, 112, "Alfred Hitchcock", "James Stewart, Grace Kelly", &["Mystery", "Thriller"][..]),
        ("Alien", 1979, 117, "Ridley Scott", "Sigourney Weaver, Tom Skerritt", &["Horror", "Sci-Fi"][..]),
        ("Memento", 2000, 113, "Christopher Nolan", "Guy Pearce, Carrie-Anne Moss", &["Mystery", "Thriller"][..]),
        ("Vertigo", 1958, 128, "Alfred Hitchcock", "James Stewart, Kim Novak", &["Mystery", "Romance", "Thriller"][..]),
    ]
    .into_iter()
    .map(|(title, year, runtime, director, actors, genres)| {
        Movie::new(title, year, runtime, director, actors).with_genres(genres.iter().copied())
    })
    .collect()
}
