use daffodil_core::{Book, Books, BooksScreen};

fn titles(books: &Books) -> Vec<Option<&str>> {
    books.iter().map(|book| book.title.as_deref()).collect()
}

#[test]
fn books_screen_has_empty_books_component() {
    let screen = BooksScreen::new();

    assert!(screen.books().items.is_empty());
    assert!(screen.books().is_empty());
    assert_eq!(screen.books().len(), 0);
    assert_eq!(BooksScreen::default(), screen);
}

#[test]
fn appended_book_keeps_its_title() {
    let mut screen = BooksScreen::new();
    screen.books_mut().items.push(Book::titled("Dune"));

    let books = screen.books();
    assert_eq!(books.items.len(), 1);
    assert_eq!(books.items[0].title.as_deref(), Some("Dune"));
}

#[test]
fn insertion_order_is_preserved() {
    let mut books = Books::new();
    for title in ["A", "B", "C"] {
        books.push(Book::titled(title));
    }

    assert_eq!(titles(&books), vec![Some("A"), Some("B"), Some("C")]);
}

#[test]
fn duplicates_and_untitled_books_are_allowed() {
    let mut books = Books::new();
    books.push(Book::titled("Dune"));
    books.push(Book::titled("Dune"));
    books.push(Book::new());

    assert_eq!(books.len(), 3);
    assert_eq!(titles(&books), vec![Some("Dune"), Some("Dune"), None]);
}

#[test]
fn title_is_mutable_in_place() {
    let mut screen = BooksScreen::new();
    screen.books_mut().push(Book::new());

    screen.books_mut().items[0].title = Some("Emma".to_string());
    assert_eq!(screen.books().items[0].title.as_deref(), Some("Emma"));

    screen.books_mut().items[0].title = None;
    assert_eq!(screen.books().items[0].title, None);
}

#[test]
fn removing_keeps_remaining_order() {
    let mut books = Books::new();
    for title in ["A", "B", "C"] {
        books.push(Book::titled(title));
    }

    let removed = books.items.remove(1);
    assert_eq!(removed.title.as_deref(), Some("B"));
    assert_eq!(titles(&books), vec![Some("A"), Some("C")]);
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let books = Books::new();
    let _ = &books.items[0];
}

#[test]
fn books_screen_serializes_to_expected_wire_shape() {
    let mut screen = BooksScreen::new();
    screen.books_mut().push(Book::titled("Dune"));
    screen.books_mut().push(Book::new());

    let json = serde_json::to_value(&screen).expect("serialize screen");
    assert_eq!(
        json,
        serde_json::json!({
            "books": { "items": [ { "title": "Dune" }, { "title": null } ] }
        })
    );
}

#[test]
fn missing_items_deserialize_as_empty() {
    let screen: BooksScreen =
        serde_json::from_value(serde_json::json!({ "books": {} })).expect("decode screen");
    assert!(screen.books().is_empty());
}
