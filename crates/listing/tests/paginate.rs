use audiosight_listing::{PageRequest, PageResult, Searchable, paginate};

#[derive(Debug, PartialEq)]
struct Contact {
    name: &'static str,
    email: &'static str,
}

impl Searchable for Contact {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.email]
    }
}

fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            name: "Elizabeth Polson",
            email: "elizabethpolson@hotmail.com",
        },
        Contact {
            name: "John David",
            email: "davidjohn22@email.com",
        },
        Contact {
            name: "Krishnav Rajan",
            email: "krishnavrajan3@email.com",
        },
        Contact {
            name: "Sumanth Tinson",
            email: "tintintin@email.com",
        },
        Contact {
            name: "EG Subramani",
            email: "egsl322@email.com",
        },
        Contact {
            name: "Ranjan Moari",
            email: "ranjanmaarij@yahoo.com",
        },
        Contact {
            name: "Phillipe Gopal",
            email: "gopal22@email.com",
        },
    ]
}

#[test]
fn full_collection_on_one_page() {
    let records = contacts();
    let result = paginate(&records, &PageRequest::new(7)).unwrap();
    assert_eq!(result.items().len(), 7);
    assert_eq!(result.total_items(), 7);
    assert_eq!(result.total_pages(), 1);
    assert_eq!(result.current_page(), 1);
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let records = contacts();
    let result = paginate(&records, &PageRequest::new(7).with_page(5)).unwrap();
    assert_eq!(result.current_page(), 1);

    let result = paginate(&records, &PageRequest::new(3).with_page(99)).unwrap();
    assert_eq!(result.total_pages(), 3);
    assert_eq!(result.current_page(), 3);
    assert_eq!(result.items().len(), 1);
}

#[test]
fn query_matches_name_or_email() {
    let records = contacts();

    // "polson" hits both the name and the email of the same record.
    let by_name = paginate(&records, &PageRequest::new(7).with_query("Polson")).unwrap();
    assert_eq!(by_name.total_items(), 1);
    assert_eq!(by_name.items()[0].name, "Elizabeth Polson");

    // "yahoo" only exists in an email field.
    let by_email = paginate(&records, &PageRequest::new(7).with_query("yahoo")).unwrap();
    assert_eq!(by_email.total_items(), 1);
    assert_eq!(by_email.items()[0].name, "Ranjan Moari");
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let records = contacts();
    let request = PageRequest::new(7).with_query("an");
    let once = paginate(&records, &request).unwrap();

    // Re-filter the already-filtered set with the same query.
    let names: Vec<&Contact> = once.items().to_vec();
    let twice = paginate(&names, &request).unwrap();

    assert_eq!(twice.total_items(), once.total_items());
    let once_names: Vec<&str> = once.items().iter().map(|c| c.name).collect();
    let twice_names: Vec<&str> = twice.items().iter().map(|c| c.name).collect();
    assert_eq!(once_names, twice_names);
}

#[test]
fn no_match_is_empty_with_page_one() {
    let records = contacts();
    let result = paginate(&records, &PageRequest::new(7).with_query("zzz")).unwrap();
    assert!(result.items().is_empty());
    assert_eq!(result.total_items(), 0);
    assert_eq!(result.total_pages(), 0);
    assert_eq!(result.current_page(), 1);
}

#[test]
fn concatenating_all_pages_reconstructs_the_filtered_sequence() {
    let records = contacts();
    for page_size in [1, 2, 3, 7] {
        let probe = paginate(&records, &PageRequest::new(page_size)).unwrap();
        let mut reconstructed: Vec<&Contact> = Vec::new();
        for page in 1..=probe.total_pages() {
            let result =
                paginate(&records, &PageRequest::new(page_size).with_page(page)).unwrap();
            assert_eq!(result.current_page(), page);
            reconstructed.extend(result.into_items());
        }
        let all: Vec<&Contact> = records.iter().collect();
        assert_eq!(reconstructed, all, "page_size={page_size}");
    }
}

#[test]
fn deletion_recovery_via_clamping() {
    // Sit on the last page, delete until it disappears, and adopt the
    // clamped page from each result, as the UI flow does.
    let mut records = contacts();
    let page_size = 3;
    let mut page = 3; // last page: one record

    records.pop();
    let result = paginate(&records, &PageRequest::new(page_size).with_page(page)).unwrap();
    page = result.current_page();
    assert_eq!(page, 2);
    assert_eq!(result.total_pages(), 2);
    assert_eq!(result.items().len(), page_size);

    records.truncate(2);
    let result = paginate(&records, &PageRequest::new(page_size).with_page(page)).unwrap();
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.items().len(), 2);
}

#[test]
fn borrowed_result_type_is_a_view() {
    let records = contacts();
    let result: PageResult<&Contact> =
        paginate(&records, &PageRequest::new(2).with_page(2)).unwrap();
    assert_eq!(result.items()[0], &records[2]);
    assert_eq!(result.items()[1], &records[3]);
}
