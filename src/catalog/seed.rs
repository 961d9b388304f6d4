use super::model::{Book, BookStatus, Member};

pub(super) fn books() -> Vec<Book> {
    vec![
        Book::new("0001", "RANDOM1", "TONY", BookStatus::Issued),
        Book::new("0002", "RANDOM2", "PETER", BookStatus::Available),
        Book::new("0003", "RANDOM3", "SAM", BookStatus::Available),
        Book::new("0004", "RANDOM4", "JOE", BookStatus::Issued),
    ]
}

pub(super) fn members() -> Vec<Member> {
    [
        ("0001", "ME", "04082004", "9136125577", "BOOK1", "BOOK2,BOOK3,BOOK4"),
        ("0002", "HE", "14082010", "9219922580", "BOOK2", "BOOK1,BOOK3,BOOK4"),
        ("0003", "SHE", "24092014", "9919922911", "BOOK3", "BOOK2,BOOK1,BOOK4"),
        ("0004", "Teacher", "05102006", "8724944789", "BOOK4", "BOOK2,BOOK3,BOOK1"),
    ]
    .into_iter()
    .map(|(uid, name, date_joined, contact_num, status, history)| Member {
        uid: uid.to_string(),
        name: name.to_string(),
        date_joined: date_joined.to_string(),
        contact_num: contact_num.to_string(),
        status: status.to_string(),
        history: history.split(',').map(str::to_string).collect(),
    })
    .collect()
}
