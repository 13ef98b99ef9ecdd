use database::{model::person::Person, service::DeleteCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Create Person",
            FormMode::Edit => "Edit Person",
        }
    }

    fn action(self) -> &'static str {
        match self {
            FormMode::Create => "/person/create",
            FormMode::Edit => "/person/edit",
        }
    }
}

/// Escapes text for use in element content and quoted attribute values
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

pub fn list_page(people: &[Person]) -> String {
    let mut body = String::from("    <p><a href=\"/person/create\">Create New Person</a></p>\n");

    if people.is_empty() {
        body.push_str("    <p>No people have been added yet.</p>\n");
        return layout("People", &body);
    }

    body.push_str(
        "    <table>\n        <tr><th>Name</th><th>Email Address</th><th>Actions</th></tr>\n",
    );

    for person in people {
        let id = person
            .person_id
            .map(|id| id.to_string())
            .unwrap_or_default();

        body.push_str(&format!(
            "        <tr><td>{name}</td><td>{email}</td><td><a href=\"/person/edit/{id}\">Edit</a> <a href=\"/person/delete/{id}\">Delete</a></td></tr>\n",
            name = escape(&person.display_name()),
            email = escape(&person.email_address),
            id = id,
        ));
    }

    body.push_str("    </table>\n");

    layout("People", &body)
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "        <p><label for=\"{name}\">{label}</label> <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n",
        label = label,
        name = name,
        value = escape(value),
    )
}

pub fn person_form(mode: FormMode, person: &Person, errors: &[String]) -> String {
    let mut body = String::new();

    if !errors.is_empty() {
        body.push_str("    <ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!("        <li>{}</li>\n", escape(error)));
        }
        body.push_str("    </ul>\n");
    }

    body.push_str(&format!(
        "    <form action=\"{}\" method=\"post\">\n",
        mode.action()
    ));

    // The create form never carries an id, one is assigned on save
    if let (FormMode::Edit, Some(id)) = (mode, person.person_id) {
        body.push_str(&format!(
            "        <input type=\"hidden\" name=\"personId\" value=\"{}\">\n",
            id
        ));
    }

    body.push_str(&text_input("First Name", "firstName", &person.first_name));
    body.push_str(&text_input("Last Name", "lastName", &person.last_name));
    body.push_str(&text_input(
        "Email Address",
        "emailAddress",
        &person.email_address,
    ));
    body.push_str(&text_input(
        "Street Address",
        "streetAddress",
        &person.street_address,
    ));
    body.push_str(&text_input("City", "city", &person.city));
    body.push_str(&text_input("State", "state", &person.state));
    body.push_str(&text_input("Zip Code", "zipCode", &person.zip_code));
    body.push_str(
        "        <p><input type=\"submit\" value=\"Save\"> <a href=\"/person/list\">Cancel</a></p>\n    </form>\n",
    );

    layout(mode.title(), &body)
}

pub fn delete_page(person: &Person) -> String {
    let id = person
        .person_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let body = format!(
        r#"    <p>Are you sure you want to delete {name}?</p>
    <form action="/person/delete" method="post">
        <input type="hidden" name="personId" value="{id}">
        <input type="submit" name="command" value="{delete}">
        <input type="submit" name="command" value="{cancel}">
    </form>
"#,
        name = escape(&person.display_name()),
        id = id,
        delete = DeleteCommand::Delete.as_ref(),
        cancel = DeleteCommand::Cancel.as_ref(),
    );

    layout("Delete Person", &body)
}

pub fn failure_page(title: &str, message: &str) -> String {
    let body = format!(
        "    <p>{}</p>\n    <p><a href=\"/person/list\">Back to the list</a></p>\n",
        escape(message)
    );

    layout(title, &body)
}
