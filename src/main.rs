use forward_list::collections::linked::SinglyLinkedList;

fn main() {
    println!("\n[SinglyLinkedList]\n");

    let mut list = SinglyLinkedList::<i32>::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    println!("l = ( {list} )");
    println!("has_duplicates(l) = {}", list.has_duplicates());

    let mut copy = list.clone();
    copy.push_back(1);
    *copy.front_mut() = 10;

    println!("copy = ( {copy} )");
    println!("has_duplicates(copy) = {}", copy.has_duplicates());
    println!("l is unchanged: {list:?}");

    print!("positions:");
    let mut pos = copy.begin();
    while pos != copy.end() {
        print!(" {}", pos.get());
        pos.move_next();
    }
    println!();

    while !copy.is_empty() {
        let value = copy.pop_front();
        println!("popped {value}, {copy:?}");
    }

    println!("try_front on empty: {:?}", copy.try_front());
}
